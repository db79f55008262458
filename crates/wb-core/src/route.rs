//! The path a player took through the story.

use serde::{Deserialize, Serialize};

use crate::graph::{Landmark, StoryGraph};

/// One accepted decision: the node it was made at and the choice picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Title of the node where the decision was made.
    pub title: String,
    /// Description of the chosen option.
    pub description: String,
}

impl RouteStep {
    /// Create a route step.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for RouteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Everything a renderer needs to draw a finished route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Heading for the rendering.
    pub title: String,
    /// Cities on the map, in travel order.
    pub landmarks: Vec<Landmark>,
    /// Decisions taken, in order.
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Build a summary for `steps` using the story's map data.
    pub fn new(graph: &StoryGraph, steps: &[RouteStep]) -> Self {
        Self {
            title: format!(
                "{}'s Journey: {}",
                graph.meta.protagonist, graph.meta.title
            ),
            landmarks: graph.meta.landmarks.clone(),
            steps: steps.to_vec(),
        }
    }
}
