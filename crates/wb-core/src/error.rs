use crate::validate::ValidationIssue;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur while building or querying a story graph.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// A node with the same identifier was already added.
    #[error("node already exists: \"{0}\"")]
    DuplicateNode(String),

    /// The requested node identifier does not exist in the graph.
    #[error("node not found: \"{0}\"")]
    UnknownNode(String),

    /// The graph failed validation.
    #[error("malformed story graph: {}", join_issues(.0))]
    Malformed(Vec<ValidationIssue>),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
