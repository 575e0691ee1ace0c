//! Render error types.

use thiserror::Error;

/// Convenience result type for the mandelscope crates.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Failures the rendering pipeline can report.
///
/// Every variant except `Cancelled` is a structural input error raised
/// before any computation begins; the pipeline itself is deterministic and
/// never fails transiently, so nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("render cancelled")]
    Cancelled,
}
