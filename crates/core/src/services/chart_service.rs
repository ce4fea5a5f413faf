use tracing::{debug, warn};

use crate::models::chart::{
    Animation, Axis, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Fill, Grid,
    Plugins, Scales, Ticks, Toggle,
};
use crate::models::health::LimbAngles;
use crate::surfaces::traits::DrawingSurface;

use super::gradient_builder::vertical_gradient;

/// Brand gold used for the mobility line and the filled part of the score ring.
pub const ACCENT_COLOR: &str = "#f4b400";
pub const TICK_COLOR: &str = "#999";
pub const GRID_COLOR: &str = "rgba(0,0,0,0.05)";
pub const MOBILITY_FILL_START: &str = "rgba(244,180,0,0.4)";
pub const MOBILITY_FILL_END: &str = "rgba(244,180,0,0.02)";
pub const SCORE_TRACK_COLOR: &str = "#f1f1f1";

pub const RISK_LABELS: [&str; 3] = ["Low", "Moderate", "Elevated"];
pub const RISK_COLORS: [&str; 3] = ["#4caf50", "#ff9800", "#f44336"];

const MOBILITY_ANIMATION_MS: u32 = 1200;
const MOBILITY_EASING: &str = "easeOutQuart";
const RISK_BAR_RADIUS: f64 = 12.0;
const SCORE_CUTOUT: &str = "75%";

/// Assembles chart configurations for the dashboard widgets.
///
/// Pure construction: nothing here touches the engine. Inputs are passed
/// through as given, apart from the circular score which is clamped.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Line chart of a daily mobility series.
    ///
    /// One label per sample ("Day 1".."Day N") and a gold gradient fill
    /// under the line.
    pub fn mobility_config(&self, surface: &dyn DrawingSurface, data: &[f64]) -> ChartConfig {
        let gradient = vertical_gradient(surface, MOBILITY_FILL_START, MOBILITY_FILL_END);

        debug!(samples = data.len(), "assembling mobility chart");

        ChartConfig {
            kind: ChartKind::Line,
            data: ChartData {
                labels: day_labels(data.len()),
                datasets: vec![Dataset {
                    data: data.to_vec(),
                    border_color: Some(ACCENT_COLOR.to_string()),
                    background_color: Some(Fill::Gradient(gradient)),
                    fill: Some(true),
                    ..Dataset::default()
                }],
            },
            options: ChartOptions {
                responsive: Some(true),
                maintain_aspect_ratio: Some(false),
                animation: Some(Animation {
                    duration: MOBILITY_ANIMATION_MS,
                    easing: MOBILITY_EASING.to_string(),
                }),
                scales: Some(Scales {
                    x: Some(Axis {
                        grid: Some(hidden_grid()),
                        ticks: Some(tick_color()),
                    }),
                    y: Some(Axis {
                        grid: Some(faint_grid()),
                        ticks: Some(tick_color()),
                    }),
                }),
                ..ChartOptions::default()
            },
        }
    }

    /// Bar chart of the three fall-risk bands, always in Low/Moderate/Elevated order.
    pub fn risk_config(&self, low: f64, moderate: f64, elevated: f64) -> ChartConfig {
        debug!(low, moderate, elevated, "assembling risk chart");

        ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: RISK_LABELS.iter().map(|l| l.to_string()).collect(),
                datasets: vec![Dataset {
                    data: vec![low, moderate, elevated],
                    background_color: Some(Fill::PerPoint(
                        RISK_COLORS.iter().map(|c| c.to_string()).collect(),
                    )),
                    border_radius: Some(RISK_BAR_RADIUS),
                    ..Dataset::default()
                }],
            },
            options: ChartOptions {
                responsive: Some(true),
                maintain_aspect_ratio: Some(false),
                scales: Some(Scales {
                    x: Some(Axis {
                        grid: Some(hidden_grid()),
                        ticks: None,
                    }),
                    y: Some(Axis {
                        grid: Some(faint_grid()),
                        ticks: None,
                    }),
                }),
                ..ChartOptions::default()
            },
        }
    }

    /// Doughnut ring showing `score` (0.0–1.0) as a percentage.
    ///
    /// Out-of-range scores are clamped to [0, 1] and NaN counts as 0, so the
    /// two segments always sum to 100.
    pub fn circular_score_config(&self, score: f64) -> ChartConfig {
        let clamped = clamp_score(score);
        let filled = clamped * 100.0;

        ChartConfig {
            kind: ChartKind::Doughnut,
            data: ChartData {
                labels: Vec::new(),
                datasets: vec![Dataset {
                    data: vec![filled, 100.0 - filled],
                    background_color: Some(Fill::PerPoint(vec![
                        ACCENT_COLOR.to_string(),
                        SCORE_TRACK_COLOR.to_string(),
                    ])),
                    border_width: Some(0.0),
                    ..Dataset::default()
                }],
            },
            options: ChartOptions {
                cutout: Some(SCORE_CUTOUT.to_string()),
                plugins: Some(Plugins {
                    tooltip: Some(Toggle { enabled: false }),
                }),
                ..ChartOptions::default()
            },
        }
    }

    /// Bar chart of the four limb angles.
    pub fn limb_angle_config(&self, angles: &LimbAngles) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: LimbAngles::LABELS.iter().map(|l| l.to_string()).collect(),
                datasets: vec![Dataset {
                    label: Some("Limb Angles".to_string()),
                    data: angles.values().to_vec(),
                    ..Dataset::default()
                }],
            },
            options: ChartOptions::default(),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// "Day 1", "Day 2", … one per sample.
pub fn day_labels(count: usize) -> Vec<String> {
    (1..=count).map(|day| format!("Day {day}")).collect()
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        warn!("circular score is NaN, rendering as 0");
        return 0.0;
    }
    let clamped = score.clamp(0.0, 1.0);
    if clamped != score {
        warn!(score, clamped, "circular score out of range, clamping");
    }
    clamped
}

fn hidden_grid() -> Grid {
    Grid {
        display: Some(false),
        color: None,
    }
}

fn faint_grid() -> Grid {
    Grid {
        display: None,
        color: Some(GRID_COLOR.to_string()),
    }
}

fn tick_color() -> Ticks {
    Ticks {
        color: Some(TICK_COLOR.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_score_keeps_in_range_values() {
        assert_eq!(clamp_score(0.0), 0.0);
        assert_eq!(clamp_score(0.5), 0.5);
        assert_eq!(clamp_score(1.0), 1.0);
    }

    #[test]
    fn clamp_score_pins_out_of_range_values() {
        assert_eq!(clamp_score(-0.3), 0.0);
        assert_eq!(clamp_score(1.7), 1.0);
        assert_eq!(clamp_score(f64::INFINITY), 1.0);
        assert_eq!(clamp_score(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn clamp_score_treats_nan_as_zero() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn hidden_grid_serializes_display_only() {
        let json = serde_json::to_value(hidden_grid()).unwrap();
        assert_eq!(json, serde_json::json!({ "display": false }));
    }
}
