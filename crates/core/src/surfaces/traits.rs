use crate::errors::CoreError;
use crate::models::chart::{ChartConfig, ChartHandle};
use crate::models::defaults::ChartDefaults;
use crate::models::gradient::LinearGradient;

/// A drawing surface bound to one canvas element.
///
/// Host environments (a browser canvas context, an offscreen bitmap, a test
/// double) implement this. The core only asks it for gradient objects; all
/// pixel work belongs to the engine.
pub trait DrawingSurface: Send + Sync {
    /// Identifier of the canvas this surface draws into.
    fn canvas_id(&self) -> &str;

    /// Create an empty linear gradient from (x0, y0) to (x1, y1).
    fn create_linear_gradient(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> LinearGradient {
        LinearGradient::new(x0, y0, x1, y1)
    }
}

/// Resolves canvas identifiers to drawing surfaces.
///
/// Returns `None` when no canvas with that id exists; callers decide how to
/// report the absence.
pub trait SurfaceProvider {
    fn surface(&self, canvas_id: &str) -> Option<&dyn DrawingSurface>;
}

/// The charting engine: takes a configuration and draws it onto a surface.
///
/// Once `render` returns, the engine owns the chart. Whether a second render
/// on the same surface replaces or overlays the first is the engine's call.
pub trait ChartEngine {
    /// Human-readable name of this engine (for logs/errors).
    fn name(&self) -> &str;

    fn render(
        &mut self,
        surface: &dyn DrawingSurface,
        config: ChartConfig,
        defaults: &ChartDefaults,
    ) -> Result<ChartHandle, CoreError>;
}
