//! Story nodes.

use serde::{Deserialize, Serialize};

use crate::choice::Choice;

/// A narrative unit: a title, a body of text, and the choices leading on.
///
/// A node without choices is terminal: reaching it ends the playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    /// Heading shown when the node is presented.
    pub title: String,
    /// Narrative body.
    pub text: String,
    /// Outgoing choices, in presentation order.
    pub choices: Vec<Choice>,
}

impl StoryNode {
    /// Create a node with no choices yet.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice.
    pub fn with_choice(
        mut self,
        key: char,
        description: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.choices.push(Choice::new(key, description, target));
        self
    }

    /// Whether this node ends the story.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }

    /// Find the choice selected by `token`, if any.
    pub fn find_choice(&self, token: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.matches(token))
    }
}
