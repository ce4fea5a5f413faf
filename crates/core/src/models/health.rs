use serde::{Deserialize, Serialize};

/// Joint angles reported by the movement sensors, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimbAngles {
    pub right_arm: f64,
    pub left_arm: f64,
    pub right_leg: f64,
    pub left_leg: f64,
}

impl LimbAngles {
    /// Display labels, in the same order as `values()`.
    pub const LABELS: [&'static str; 4] = ["Right Arm", "Left Arm", "Right Leg", "Left Leg"];

    pub fn new(right_arm: f64, left_arm: f64, right_leg: f64, left_leg: f64) -> Self {
        Self {
            right_arm,
            left_arm,
            right_leg,
            left_leg,
        }
    }

    /// The fixed readings shown on the static movement widget.
    pub fn demo() -> Self {
        Self::new(90.0, 110.0, 70.0, 85.0)
    }

    pub fn values(&self) -> [f64; 4] {
        [self.right_arm, self.left_arm, self.right_leg, self.left_leg]
    }

    pub fn mean(&self) -> f64 {
        self.values().iter().sum::<f64>() / 4.0
    }
}

/// Fall-risk band derived from a mobility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Everything the dashboard shows for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub angles: LimbAngles,

    /// Normalized brain activity factor (sensor range 0.6–1.0).
    pub brain_activity: f64,

    /// Mobility score on a 0–100 scale, rounded to two decimals.
    pub score: f64,

    pub risk: RiskLevel,
}

/// Canvas ids the dashboard renders into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCanvases {
    pub movement: String,
    pub score: String,
}

impl Default for DashboardCanvases {
    fn default() -> Self {
        Self {
            movement: crate::MOVEMENT_CANVAS_ID.to_string(),
            score: "scoreChart".to_string(),
        }
    }
}
