//! Error types for rendering.

use thiserror::Error;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised by a single rendering mechanism.
///
/// These never escape [`crate::RouteVisualizer`]; they are folded into a
/// [`crate::RenderReport`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// The viewer binary is not installed or not on `PATH`.
    #[error("route viewer `{0}` not found")]
    ViewerNotFound(String),

    /// The viewer ran but did not exit cleanly.
    #[error("route viewer exited with {0}")]
    ViewerFailed(String),

    /// The route could not be encoded for the viewer.
    #[error("cannot encode route: {0}")]
    Payload(#[from] serde_json::Error),

    /// Writing an artifact or launching a process failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
