//! Map and route-summary rendering for Westbound.
//!
//! [`RouteVisualizer`] is the `wb-fiction` visualizer used by the CLI. It
//! keeps a cached plain-text map of the story and renders a finished route in
//! two steps: first the `westbound-route` window, then an HTML page with an
//! inline SVG map if the window cannot be shown.

/// Render configuration.
pub mod config;
/// Error types for rendering.
pub mod error;
/// HTML/SVG route summary.
pub mod html;
/// The cached plain-text story map.
pub mod map;
/// Opening files with the platform's default handler.
pub mod opener;
/// The two-step route summary strategy.
pub mod strategy;
/// Launching the route viewer window.
pub mod viewer;

pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
pub use map::MapArtifact;
pub use strategy::{Attempt, RenderReport, RouteVisualizer};
pub use viewer::RouteWindow;
