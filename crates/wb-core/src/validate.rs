//! Validation of a story graph before it is frozen.
//!
//! Checks that the start node and map checkpoint exist, that every choice
//! leads to a node in the graph, and that choice keys are usable: unique per
//! node (ignoring case) and never the reserved quit key.

use std::collections::{BTreeMap, HashSet};

use crate::choice::QUIT_KEY;
use crate::graph::StoryMeta;
use crate::node::StoryNode;

/// A problem found while validating a story graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Identifier of the node where the issue was found.
    pub node: String,
    /// A human-readable description of the issue.
    pub message: String,
}

impl ValidationIssue {
    fn new(node: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.node, self.message)
    }
}

/// Validate a set of nodes against the story metadata.
///
/// Returns every issue found; an empty list means the graph is closed and
/// all keys are selectable.
pub fn validate_graph(
    meta: &StoryMeta,
    nodes: &BTreeMap<String, StoryNode>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !nodes.contains_key(&meta.start) {
        issues.push(ValidationIssue::new(&meta.start, "start node does not exist"));
    }

    if let Some(checkpoint) = &meta.map_checkpoint {
        if !nodes.contains_key(checkpoint) {
            issues.push(ValidationIssue::new(
                checkpoint,
                "map checkpoint does not exist",
            ));
        }
    }

    for (id, node) in nodes {
        validate_node(id, node, nodes, &mut issues);
    }

    issues
}

/// Validate the choices of a single node.
fn validate_node(
    id: &str,
    node: &StoryNode,
    nodes: &BTreeMap<String, StoryNode>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut keys: HashSet<String> = HashSet::new();

    for choice in &node.choices {
        let normalized: String = choice.key.to_uppercase().collect();

        if !keys.insert(normalized) {
            issues.push(ValidationIssue::new(
                id,
                format!("duplicate choice key '{}'", choice.key),
            ));
        }

        if choice.key.eq_ignore_ascii_case(&QUIT_KEY) {
            issues.push(ValidationIssue::new(
                id,
                format!("choice key '{}' is reserved for quitting", choice.key),
            ));
        }

        if choice.key.is_whitespace() {
            issues.push(ValidationIssue::new(id, "choice key is blank"));
        }

        if !nodes.contains_key(&choice.target) {
            issues.push(ValidationIssue::new(
                id,
                format!(
                    "choice '{}' leads to unknown node \"{}\"",
                    choice.key, choice.target
                ),
            ));
        }
    }
}
