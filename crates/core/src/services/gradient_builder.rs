use crate::models::gradient::{LinearGradient, GRADIENT_EXTENT};
use crate::surfaces::traits::DrawingSurface;

/// Build a top-to-bottom two-stop gradient for chart fills.
///
/// Stop 0 is `start`, stop 1 is `end`, spanning `GRADIENT_EXTENT` units.
/// Color strings are not checked.
pub fn vertical_gradient(surface: &dyn DrawingSurface, start: &str, end: &str) -> LinearGradient {
    let mut gradient = surface.create_linear_gradient(0.0, 0.0, 0.0, GRADIENT_EXTENT);
    gradient.add_color_stop(0.0, start);
    gradient.add_color_stop(1.0, end);
    gradient
}
