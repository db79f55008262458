//! Two-step route summary: the viewer window first, the HTML page second.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use wb_core::{RouteStep, RouteSummary, StoryGraph};
use wb_fiction::Visualizer;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::html::render_route_html;
use crate::map::MapArtifact;
use crate::opener::open_in_default_app;
use crate::viewer::RouteWindow;

/// Outcome of one rendering mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// The mechanism produced its rendering.
    Rendered,
    /// The mechanism is not available here (e.g. the viewer is not installed).
    Unavailable(String),
    /// The mechanism was available but failed.
    Failed(String),
}

impl Attempt {
    /// Whether this attempt produced a rendering.
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered)
    }

    fn from_window(result: Result<(), RenderError>) -> Self {
        match result {
            Ok(()) => Self::Rendered,
            Err(e @ RenderError::ViewerNotFound(_)) => Self::Unavailable(e.to_string()),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Per-mechanism results of one summary rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// The viewer window.
    pub window: Attempt,
    /// The HTML page; `None` when the window rendered.
    pub fallback: Option<Attempt>,
    /// Where the HTML page was (or would have been) written.
    pub html_path: PathBuf,
    /// Whether the HTML page was handed to the default handler.
    pub opened: bool,
}

impl RenderReport {
    /// Whether any mechanism produced a rendering.
    pub fn succeeded(&self) -> bool {
        self.window.is_rendered() || self.fallback.as_ref().is_some_and(Attempt::is_rendered)
    }

    /// Describe the outcome for the player.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.window {
            Attempt::Rendered => return Ok(()),
            Attempt::Unavailable(reason) | Attempt::Failed(reason) => {
                writeln!(out, "Unable to open the route window: {reason}")?;
            }
        }

        match &self.fallback {
            Some(Attempt::Rendered) => {
                writeln!(
                    out,
                    "A route summary was written to: {}",
                    self.html_path.display()
                )?;
                if !self.opened {
                    writeln!(out, "Open it in a browser to view the route.")?;
                }
            }
            Some(Attempt::Unavailable(reason) | Attempt::Failed(reason)) => {
                writeln!(out, "Unable to write the route summary: {reason}")?;
            }
            None => {}
        }

        if !self.succeeded() {
            writeln!(out, "No route view could be rendered.")?;
        }
        writeln!(out)
    }
}

/// The visualizer used by the game: a cached map plus the two-step summary.
#[derive(Debug, Clone)]
pub struct RouteVisualizer {
    config: RenderConfig,
    map: MapArtifact,
    window: RouteWindow,
    template: RouteSummary,
}

impl RouteVisualizer {
    /// Create a visualizer for `graph`.
    pub fn new(graph: &StoryGraph, config: RenderConfig) -> Self {
        Self {
            map: MapArtifact::new(&config.map_path, graph),
            window: RouteWindow::new(&config.viewer),
            template: RouteSummary::new(graph, &[]),
            config,
        }
    }

    /// Render `route`: the window first, the HTML page only if the window
    /// did not render.
    pub fn render(&self, route: &[RouteStep]) -> RenderReport {
        let summary = RouteSummary {
            steps: route.to_vec(),
            ..self.template.clone()
        };
        let html_path = self.config.html_path.clone();

        let window = Attempt::from_window(self.window.show(&summary));
        if window.is_rendered() {
            info!("route window closed");
            return RenderReport {
                window,
                fallback: None,
                html_path,
                opened: false,
            };
        }
        warn!(?window, "route window unavailable, falling back to HTML");

        let (fallback, opened) = match write_html(&html_path, &summary) {
            Ok(()) => (Attempt::Rendered, self.open(&html_path)),
            Err(e) => {
                warn!(error = %e, path = %html_path.display(), "route summary not written");
                (Attempt::Failed(e.to_string()), false)
            }
        };

        RenderReport {
            window,
            fallback: Some(fallback),
            html_path,
            opened,
        }
    }

    fn open(&self, path: &Path) -> bool {
        if !self.config.open_fallback {
            return false;
        }
        match open_in_default_app(path) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "default handler could not be launched");
                false
            }
        }
    }
}

fn write_html(path: &Path, summary: &RouteSummary) -> io::Result<()> {
    fs::write(path, render_route_html(summary))
}

impl Visualizer for RouteVisualizer {
    fn announce_map(&mut self) -> io::Result<Option<PathBuf>> {
        self.map.ensure().map(|p| Some(p.to_path_buf()))
    }

    fn render_summary(&mut self, route: &[RouteStep], out: &mut dyn Write) -> bool {
        let _ = writeln!(
            out,
            "Opening a route view... Close the window to continue.\n"
        );
        let _ = out.flush();

        let report = self.render(route);
        if let Err(e) = report.write_to(out) {
            warn!(error = %e, "could not report the route summary");
        }
        report.succeeded()
    }
}
