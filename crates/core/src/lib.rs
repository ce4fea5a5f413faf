pub mod errors;
pub mod models;
pub mod services;
pub mod surfaces;

use models::{
    chart::{ChartConfig, ChartHandle},
    defaults::ChartDefaults,
    health::{DashboardCanvases, DashboardSnapshot, LimbAngles},
};
use services::chart_service::ChartService;
use surfaces::traits::{ChartEngine, DrawingSurface, SurfaceProvider};
use tracing::{info, warn};

use errors::CoreError;

/// Canvas id of the static movement widget on the dashboard page.
pub const MOVEMENT_CANVAS_ID: &str = "movementChart";

/// Main entry point for the FallVision chart core.
///
/// Holds the style defaults, the surface provider that resolves canvas ids
/// and the engine that draws. Each `render_*` call resolves the canvas,
/// assembles a fresh configuration and hands it to the engine.
#[must_use]
pub struct ChartFactory<P, E> {
    defaults: ChartDefaults,
    provider: P,
    engine: E,
    chart_service: ChartService,
}

impl<P, E: ChartEngine> std::fmt::Debug for ChartFactory<P, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartFactory")
            .field("defaults", &self.defaults)
            .field("engine", &self.engine.name())
            .finish()
    }
}

impl<P: SurfaceProvider, E: ChartEngine> ChartFactory<P, E> {
    pub fn new(defaults: ChartDefaults, provider: P, engine: E) -> Self {
        Self {
            defaults,
            provider,
            engine,
            chart_service: ChartService::new(),
        }
    }

    /// Factory with the stock dashboard defaults.
    pub fn with_default_style(provider: P, engine: E) -> Self {
        Self::new(ChartDefaults::default(), provider, engine)
    }

    #[must_use]
    pub fn defaults(&self) -> &ChartDefaults {
        &self.defaults
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the provider, e.g. to register canvases added later.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    // ── Dashboard widgets ───────────────────────────────────────────

    /// Render the daily mobility trend as a filled line chart.
    pub fn render_mobility_chart(
        &mut self,
        canvas_id: &str,
        data: &[f64],
    ) -> Result<ChartHandle, CoreError> {
        let surface = resolve(&self.provider, canvas_id)?;
        let config = self.chart_service.mobility_config(surface, data);
        draw(&mut self.engine, surface, config, &self.defaults)
    }

    /// Render the Low / Moderate / Elevated fall-risk bars.
    pub fn render_risk_chart(
        &mut self,
        canvas_id: &str,
        low: f64,
        moderate: f64,
        elevated: f64,
    ) -> Result<ChartHandle, CoreError> {
        let surface = resolve(&self.provider, canvas_id)?;
        let config = self.chart_service.risk_config(low, moderate, elevated);
        draw(&mut self.engine, surface, config, &self.defaults)
    }

    /// Render a 0.0–1.0 score as a percentage ring. Out-of-range scores are clamped.
    pub fn render_circular_score(
        &mut self,
        canvas_id: &str,
        score: f64,
    ) -> Result<ChartHandle, CoreError> {
        let surface = resolve(&self.provider, canvas_id)?;
        let config = self.chart_service.circular_score_config(score);
        draw(&mut self.engine, surface, config, &self.defaults)
    }

    /// Render the four limb angles as bars.
    pub fn render_limb_angle_chart(
        &mut self,
        canvas_id: &str,
        angles: &LimbAngles,
    ) -> Result<ChartHandle, CoreError> {
        let surface = resolve(&self.provider, canvas_id)?;
        let config = self.chart_service.limb_angle_config(angles);
        draw(&mut self.engine, surface, config, &self.defaults)
    }

    /// Render one scored reading: limb angles plus the mobility score ring.
    ///
    /// Returns `(movement, score)` handles. Both canvases are resolved before
    /// anything is drawn, so a missing canvas leaves the engine untouched.
    pub fn render_dashboard(
        &mut self,
        snapshot: &DashboardSnapshot,
        canvases: &DashboardCanvases,
    ) -> Result<(ChartHandle, ChartHandle), CoreError> {
        resolve(&self.provider, &canvases.movement)?;
        resolve(&self.provider, &canvases.score)?;

        let movement = self.render_limb_angle_chart(&canvases.movement, &snapshot.angles)?;
        let score = self.render_circular_score(&canvases.score, snapshot.score / 100.0)?;
        Ok((movement, score))
    }
}

fn resolve<'a, P: SurfaceProvider>(
    provider: &'a P,
    canvas_id: &str,
) -> Result<&'a dyn DrawingSurface, CoreError> {
    provider.surface(canvas_id).ok_or_else(|| {
        warn!(canvas_id, "canvas not found");
        CoreError::SurfaceNotFound(canvas_id.to_string())
    })
}

fn draw<E: ChartEngine>(
    engine: &mut E,
    surface: &dyn DrawingSurface,
    config: ChartConfig,
    defaults: &ChartDefaults,
) -> Result<ChartHandle, CoreError> {
    let kind = config.kind;
    let handle = engine.render(surface, config, defaults)?;
    info!(
        canvas_id = surface.canvas_id(),
        chart = ?kind,
        engine = engine.name(),
        id = %handle.id,
        "chart rendered"
    );
    Ok(handle)
}
