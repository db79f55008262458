//! Error types for the traversal engine.

use thiserror::Error;

/// Result type for engine operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during a playthrough.
///
/// Invalid interactive input is not an error: the engine re-prompts.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A scripted playthrough ran out of tokens before reaching an ending.
    #[error("scripted choices ran out at node \"{node}\"")]
    ScriptExhausted {
        /// Node awaiting a choice.
        node: String,
    },

    /// A scripted token matched no choice; there is nobody to re-prompt.
    #[error("scripted choice \"{token}\" is not valid at node \"{node}\"")]
    ScriptedInvalidChoice {
        /// Node the token was applied to.
        node: String,
        /// The offending token.
        token: String,
    },

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Story graph error, e.g. the session pointed at a missing node.
    #[error("story error: {0}")]
    Story(#[from] wb_core::StoryError),
}
