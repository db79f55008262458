use std::collections::{BTreeMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};
use crate::node::StoryNode;
use crate::validate::validate_graph;

/// A named point on the route map.
///
/// Coordinates live in a 900x520 space centred on the origin, y pointing up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// City name shown as the label.
    pub name: String,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Landmark {
    /// Create a landmark.
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// Metadata about the story itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMeta {
    /// Story title, used for window and document headings.
    pub title: String,
    /// Name used in narration outside the nodes ("Thanks for guiding Eli!").
    pub protagonist: String,
    /// Identifier of the node every playthrough starts from.
    pub start: String,
    /// Node at which the map artifact is announced, if any.
    pub map_checkpoint: Option<String>,
    /// Cities drawn on the route map, in travel order.
    pub landmarks: Vec<Landmark>,
}

impl StoryMeta {
    /// Create metadata with no map checkpoint and no landmarks.
    pub fn new(
        title: impl Into<String>,
        protagonist: impl Into<String>,
        start: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            protagonist: protagonist.into(),
            start: start.into(),
            map_checkpoint: None,
            landmarks: Vec::new(),
        }
    }
}

/// The immutable story graph. Owns every node, keyed by identifier.
///
/// Only obtainable through [`StoryGraphBuilder::build`], so every value of
/// this type is closed: each choice target names a node in the graph.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    /// Metadata about the story.
    pub meta: StoryMeta,
    nodes: BTreeMap<String, StoryNode>,
}

impl StoryGraph {
    /// Start building a graph.
    pub fn builder(meta: StoryMeta) -> StoryGraphBuilder {
        StoryGraphBuilder::new(meta)
    }

    /// Get a node by identifier.
    pub fn node(&self, id: &str) -> Option<&StoryNode> {
        self.nodes.get(id)
    }

    /// Get a node by identifier, failing with [`StoryError::UnknownNode`].
    pub fn require(&self, id: &str) -> StoryResult<&StoryNode> {
        self.node(id)
            .ok_or_else(|| StoryError::UnknownNode(id.to_string()))
    }

    /// Identifier of the start node.
    pub fn start(&self) -> &str {
        &self.meta.start
    }

    /// Iterate over all nodes, ordered by identifier.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &StoryNode)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Identifiers of the nodes reachable from the start, breadth-first.
    pub fn reachable(&self) -> Vec<&str> {
        let mut order = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        if let Some((id, _)) = self.nodes.get_key_value(self.start()) {
            seen.insert(id.as_str());
            queue.push_back(id.as_str());
        }

        while let Some(id) = queue.pop_front() {
            order.push(id);
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let targets = node
                .choices
                .iter()
                .filter_map(|c| self.nodes.get_key_value(&c.target))
                .map(|(target, _)| target.as_str());
            for target in targets {
                if seen.insert(target) {
                    queue.push_back(target);
                }
            }
        }

        order
    }
}

/// Collects nodes and validates the finished graph.
#[derive(Debug, Clone)]
pub struct StoryGraphBuilder {
    meta: StoryMeta,
    nodes: BTreeMap<String, StoryNode>,
    duplicate: Option<String>,
}

impl StoryGraphBuilder {
    /// Create an empty builder.
    pub fn new(meta: StoryMeta) -> Self {
        Self {
            meta,
            nodes: BTreeMap::new(),
            duplicate: None,
        }
    }

    /// Add a node. A repeated identifier fails the eventual [`build`](Self::build).
    pub fn node(mut self, id: impl Into<String>, node: StoryNode) -> Self {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            self.duplicate.get_or_insert(id);
        } else {
            self.nodes.insert(id, node);
        }
        self
    }

    /// Set the node at which the map is announced.
    pub fn map_checkpoint(mut self, id: impl Into<String>) -> Self {
        self.meta.map_checkpoint = Some(id.into());
        self
    }

    /// Add a landmark to the route map.
    pub fn landmark(mut self, name: impl Into<String>, x: f32, y: f32) -> Self {
        self.meta.landmarks.push(Landmark::new(name, x, y));
        self
    }

    /// Validate and freeze the graph.
    pub fn build(self) -> StoryResult<StoryGraph> {
        if let Some(id) = self.duplicate {
            return Err(StoryError::DuplicateNode(id));
        }

        let issues = validate_graph(&self.meta, &self.nodes);
        if !issues.is_empty() {
            return Err(StoryError::Malformed(issues));
        }

        Ok(StoryGraph {
            meta: self.meta,
            nodes: self.nodes,
        })
    }
}
