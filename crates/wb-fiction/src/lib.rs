//! Branching-narrative traversal engine for Westbound.
//!
//! Walks a [`wb_core::StoryGraph`] from its start node, taking choice tokens
//! from either a scripted list or an interactive reader, until an ending is
//! reached or the player quits. Rendering of the finished route is delegated
//! to a [`Visualizer`].

/// Play configuration.
pub mod config;
/// The traversal engine.
pub mod engine;
/// Error types for the engine.
pub mod error;
/// Sources of choice tokens.
pub mod input;
/// Per-playthrough session state.
pub mod session;
/// The visualization collaborator interface.
pub mod visualize;

pub use config::{PlayConfig, VisualizationPolicy};
pub use engine::StoryEngine;
pub use error::{FictionError, FictionResult};
pub use input::{ChoiceSource, InteractiveInput, ScriptedChoices};
pub use session::{Ending, SessionState, Transition};
pub use visualize::{NoVisualizer, Visualizer};
