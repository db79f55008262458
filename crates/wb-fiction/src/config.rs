//! Play configuration.

/// When to render a summary of the route after an ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationPolicy {
    /// Render without asking.
    Always,
    /// Ask the player first. Only interactive sources are asked.
    #[default]
    Ask,
    /// Never render.
    Never,
}

/// Configuration for a playthrough.
///
/// The quit key is not configurable: it is always [`wb_core::QUIT_KEY`],
/// which story validation reserves.
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Whether the route summary is rendered after an ending.
    pub visualization: VisualizationPolicy,
}

impl PlayConfig {
    /// Create a play config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visualization policy.
    pub fn with_visualization(mut self, policy: VisualizationPolicy) -> Self {
        self.visualization = policy;
        self
    }
}
