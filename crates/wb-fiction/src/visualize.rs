//! The interface through which the engine hands off rendering.
//!
//! The engine never looks at what a visualizer produces. It only reports the
//! map location and asks for one summary after an ending.

use std::io::{self, Write};
use std::path::PathBuf;

use wb_core::RouteStep;

/// Renders the story map and the summary of a finished route.
pub trait Visualizer {
    /// Produce or locate the static map of the story.
    ///
    /// Must be idempotent: an existing artifact is returned, not rewritten.
    /// `Ok(None)` means this visualizer has no map.
    fn announce_map(&mut self) -> io::Result<Option<PathBuf>>;

    /// Attempt to render `route`. Returns whether any mechanism succeeded.
    ///
    /// Failures are reported on `out`, never returned as errors.
    fn render_summary(&mut self, route: &[RouteStep], out: &mut dyn Write) -> bool;
}

impl<V: Visualizer + ?Sized> Visualizer for &mut V {
    fn announce_map(&mut self) -> io::Result<Option<PathBuf>> {
        (**self).announce_map()
    }

    fn render_summary(&mut self, route: &[RouteStep], out: &mut dyn Write) -> bool {
        (**self).render_summary(route, out)
    }
}

/// A visualizer that renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVisualizer;

impl Visualizer for NoVisualizer {
    fn announce_map(&mut self) -> io::Result<Option<PathBuf>> {
        Ok(None)
    }

    fn render_summary(&mut self, _route: &[RouteStep], _out: &mut dyn Write) -> bool {
        false
    }
}
