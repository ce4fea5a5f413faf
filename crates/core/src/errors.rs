use thiserror::Error;

/// Unified error type for the entire fallvision-charts-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Surfaces / Engine ───────────────────────────────────────────
    #[error("No drawing surface registered for canvas: {0}")]
    SurfaceNotFound(String),

    #[error("Render failed on canvas {canvas_id}: {message}")]
    Render {
        canvas_id: String,
        message: String,
    },

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Health metrics ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        // Serialization paths map_err explicitly; `?` on a parse lands here.
        CoreError::Deserialization(e.to_string())
    }
}
