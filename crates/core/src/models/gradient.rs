use serde::{Deserialize, Serialize};

/// Vertical span, in canvas units, covered by chart fill gradients.
pub const GRADIENT_EXTENT: f64 = 400.0;

/// One color stop of a gradient. `offset` runs from 0.0 (start) to 1.0 (end).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

/// A linear gradient between two points on a drawing surface.
///
/// Colors are kept verbatim; whatever engine paints the gradient decides
/// what a malformed color string means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// A gradient with no stops yet.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    /// Append a color stop. Stops are kept in insertion order.
    pub fn add_color_stop(&mut self, offset: f64, color: impl Into<String>) {
        self.stops.push(ColorStop {
            offset,
            color: color.into(),
        });
    }
}
