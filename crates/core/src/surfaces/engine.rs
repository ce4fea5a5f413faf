use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::chart::{ChartConfig, ChartHandle};
use crate::models::defaults::ChartDefaults;

use super::traits::{ChartEngine, DrawingSurface};

/// A chart as the engine holds it: the configuration plus the defaults it
/// was rendered with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChart {
    pub handle: ChartHandle,
    pub defaults: ChartDefaults,
    pub config: ChartConfig,
}

impl RenderedChart {
    /// Serialize as `{ handle, defaults, config }` for a frontend to replay.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }
}

/// Headless engine that records what it was asked to draw.
///
/// Keeps the latest chart per canvas: rendering onto a canvas that already
/// holds a chart replaces it.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    charts: HashMap<String, RenderedChart>,
    renders: usize,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chart currently bound to `canvas_id`, if any.
    pub fn chart(&self, canvas_id: &str) -> Option<&RenderedChart> {
        self.charts.get(canvas_id)
    }

    /// Number of canvases currently holding a chart.
    pub fn active_charts(&self) -> usize {
        self.charts.len()
    }

    /// Total render calls accepted, replacements included.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Forget the chart on a canvas (the canvas was destroyed).
    pub fn destroy(&mut self, canvas_id: &str) -> Option<RenderedChart> {
        self.charts.remove(canvas_id)
    }
}

impl ChartEngine for RecordingEngine {
    fn name(&self) -> &str {
        "recording"
    }

    fn render(
        &mut self,
        surface: &dyn DrawingSurface,
        config: ChartConfig,
        defaults: &ChartDefaults,
    ) -> Result<ChartHandle, CoreError> {
        let canvas_id = surface.canvas_id().to_string();
        let handle = ChartHandle::new(canvas_id.clone(), config.kind);

        let rendered = RenderedChart {
            handle: handle.clone(),
            defaults: defaults.clone(),
            config,
        };

        if let Some(previous) = self.charts.insert(canvas_id.clone(), rendered) {
            debug!(
                canvas_id = %canvas_id,
                replaced = %previous.handle.id,
                "replacing existing chart"
            );
        }
        self.renders += 1;

        Ok(handle)
    }
}
