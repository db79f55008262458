//! Core types for Westbound: story nodes, choices, and the story graph.
//!
//! The story graph is built once through [`StoryGraphBuilder`], validated as a
//! whole, and read-only afterwards. The traversal engine lives in
//! `wb-fiction`; this crate only knows the shape of the data.

/// Choices: labeled edges between story nodes.
pub mod choice;
/// Error types used throughout the crate.
pub mod error;
/// The immutable story graph and its builder.
pub mod graph;
/// The built-in "Journey West" story.
pub mod journey;
/// Story nodes: title, narrative text, and outgoing choices.
pub mod node;
/// Route steps and the summary payload handed to renderers.
pub mod route;
/// Load-time validation of a story graph.
pub mod validate;

/// Re-export choice types.
pub use choice::{Choice, QUIT_KEY};
/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export graph types.
pub use graph::{Landmark, StoryGraph, StoryGraphBuilder, StoryMeta};
/// Re-export node types.
pub use node::StoryNode;
/// Re-export route types.
pub use route::{RouteStep, RouteSummary};
/// Re-export validation types.
pub use validate::ValidationIssue;
