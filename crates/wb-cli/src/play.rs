//! Play one session of the built-in story.

use std::io::{self, Write};

use tracing::debug;
use wb_core::journey::{DEMO_SCRIPT, journey_west};
use wb_fiction::{
    ChoiceSource, InteractiveInput, PlayConfig, ScriptedChoices, StoryEngine, VisualizationPolicy,
};
use wb_render::{RenderConfig, RouteVisualizer};

use crate::recap;

/// Flags that shape a playthrough.
pub struct PlayOptions {
    /// Use the scripted demo path instead of stdin.
    pub demo: bool,
    /// Render the route summary without asking.
    pub view: bool,
}

impl PlayOptions {
    fn visualization(&self) -> VisualizationPolicy {
        if self.view {
            VisualizationPolicy::Always
        } else if self.demo {
            VisualizationPolicy::Never
        } else {
            VisualizationPolicy::Ask
        }
    }
}

/// Play the built-in story once and print the recap.
pub fn run(options: &PlayOptions) -> Result<(), String> {
    let graph = journey_west().map_err(|e| format!("story failed to load: {e}"))?;

    let render_config = RenderConfig::from_env();
    debug!(?render_config, demo = options.demo, view = options.view, "starting playthrough");

    let visualizer = RouteVisualizer::new(&graph, render_config);
    let config = PlayConfig::new().with_visualization(options.visualization());
    let mut engine = StoryEngine::new(&graph, config, visualizer);

    let stdin = io::stdin();
    let mut source: Box<dyn ChoiceSource> = if options.demo {
        Box::new(ScriptedChoices::new(DEMO_SCRIPT))
    } else {
        Box::new(InteractiveInput::new(stdin.lock()))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let session = engine
        .play(source.as_mut(), &mut out)
        .map_err(|e| format!("playthrough failed: {e}"))?;

    recap::print(&mut out, &graph, &session).map_err(|e| format!("cannot write recap: {e}"))?;
    out.flush().map_err(|e| format!("cannot write output: {e}"))?;

    Ok(())
}
