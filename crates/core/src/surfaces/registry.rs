use std::collections::HashMap;

use super::traits::{DrawingSurface, SurfaceProvider};

/// A plain canvas: just an id. Gradients use the default trait behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    id: String,
}

impl Canvas {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl DrawingSurface for Canvas {
    fn canvas_id(&self) -> &str {
        &self.id
    }
}

/// In-memory registry of drawing surfaces keyed by canvas id.
///
/// Stands in for the document in headless hosts and tests. Registering a
/// surface under an existing id replaces the old one.
pub struct CanvasRegistry {
    surfaces: HashMap<String, Box<dyn DrawingSurface>>,
}

impl CanvasRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            surfaces: HashMap::new(),
        }
    }

    /// Create a registry with a plain `Canvas` for every id given.
    pub fn with_canvases<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for id in ids {
            registry.register(Box::new(Canvas::new(id)));
        }
        registry
    }

    /// Register a surface under its own canvas id.
    pub fn register(&mut self, surface: Box<dyn DrawingSurface>) {
        let id = surface.canvas_id().to_string();
        self.surfaces.insert(id, surface);
    }

    /// Drop a surface, e.g. when its canvas is removed from the page.
    pub fn remove(&mut self, canvas_id: &str) -> bool {
        self.surfaces.remove(canvas_id).is_some()
    }

    pub fn contains(&self, canvas_id: &str) -> bool {
        self.surfaces.contains_key(canvas_id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SurfaceProvider for CanvasRegistry {
    fn surface(&self, canvas_id: &str) -> Option<&dyn DrawingSurface> {
        self.surfaces.get(canvas_id).map(|s| s.as_ref())
    }
}

impl Default for CanvasRegistry {
    fn default() -> Self {
        Self::new()
    }
}
