//! A single selectable edge out of a story node.

use serde::{Deserialize, Serialize};

/// Reserved token that ends a playthrough early. No choice may use it.
pub const QUIT_KEY: char = 'Q';

/// A labeled edge from one node to another, selected by a one-character key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Token the player types to pick this choice.
    pub key: char,
    /// Text shown next to the key.
    pub description: String,
    /// Identifier of the node this choice leads to.
    pub target: String,
}

impl Choice {
    /// Create a new choice.
    pub fn new(key: char, description: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            key,
            description: description.into(),
            target: target.into(),
        }
    }

    /// Whether `token` selects this choice (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn matches(&self, token: &str) -> bool {
        let mut chars = token.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_uppercase().eq(self.key.to_uppercase()),
            _ => false,
        }
    }
}
