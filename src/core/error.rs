use thiserror::Error;

/// Failures a pattern slot can run into. None of these reach the user; the
/// web layer logs them and degrades (skips the slot or renders blank).
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("canvas #{0} not found")]
    CanvasNotFound(String),
    #[error("texture fetch failed: {0}")]
    TextureFetch(String),
    #[error("texture decode failed: {0}")]
    TextureDecode(String),
    #[error("gpu setup failed: {0}")]
    Gpu(String),
}
