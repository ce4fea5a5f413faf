use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Engine-wide style defaults applied to every chart a factory renders.
///
/// Passed once to `ChartFactory::new` and forwarded to the engine with each
/// configuration. Loadable from JSON; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartDefaults {
    /// CSS font-family list used for all chart text.
    pub font_family: String,

    /// Default text color (ticks, labels).
    pub color: String,

    /// Whether dataset legends are drawn.
    pub legend_display: bool,

    /// Radius of line-chart points. 0 hides them.
    pub point_radius: f64,

    pub line_border_width: f64,

    /// Bezier curve tension for line charts (0 = straight segments).
    pub line_tension: f64,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            font_family: "'Segoe UI', 'Inter', sans-serif".to_string(),
            color: "#6c757d".to_string(),
            legend_display: false,
            point_radius: 0.0,
            line_border_width: 3.0,
            line_tension: 0.4,
        }
    }
}

impl ChartDefaults {
    /// Parse defaults from a JSON object, e.g. `{"color": "#333"}`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let defaults: ChartDefaults = serde_json::from_str(json)?;
        for (field, value) in [
            ("pointRadius", defaults.point_radius),
            ("lineBorderWidth", defaults.line_border_width),
            ("lineTension", defaults.line_tension),
        ] {
            if value < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "{field} must be non-negative, got {value}"
                )));
            }
        }
        Ok(defaults)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}
