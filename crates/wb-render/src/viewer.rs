//! Launch the `westbound-route` window for a finished route.

use std::io::ErrorKind;
use std::process::Command;

use tracing::debug;
use wb_core::RouteSummary;

use crate::error::{RenderError, RenderResult};

/// The route viewer window, run as a separate process.
///
/// The viewer receives the route as JSON through `--payload` and blocks
/// until the player closes the window.
#[derive(Debug, Clone)]
pub struct RouteWindow {
    command: String,
}

impl RouteWindow {
    /// Use `command` as the viewer binary.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The viewer command.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Show `summary` and wait for the window to close.
    pub fn show(&self, summary: &RouteSummary) -> RenderResult<()> {
        let payload = serde_json::to_string(summary)?;
        debug!(command = %self.command, steps = summary.steps.len(), "launching route viewer");

        let status = Command::new(&self.command)
            .arg("--payload")
            .arg(&payload)
            .status();

        match status {
            Ok(s) if s.success() => Ok(()),
            Ok(s) => Err(RenderError::ViewerFailed(s.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(RenderError::ViewerNotFound(self.command.clone()))
            }
            Err(e) => Err(RenderError::Io(e)),
        }
    }
}
