//! The plain-text story map, written once and then treated as a cache.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use wb_core::StoryGraph;

/// A map file at a fixed path. The first [`ensure`](Self::ensure) writes it;
/// later calls, in this process or a later one, find it and leave it alone.
#[derive(Debug, Clone)]
pub struct MapArtifact {
    path: PathBuf,
    contents: String,
}

impl MapArtifact {
    /// Prepare the map of `graph` for writing to `path`.
    pub fn new(path: impl Into<PathBuf>, graph: &StoryGraph) -> Self {
        Self {
            path: path.into(),
            contents: render_map_text(graph),
        }
    }

    /// Write the map unless it already exists. Returns its path either way.
    pub fn ensure(&self) -> io::Result<&Path> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "journey map already present");
            return Ok(&self.path);
        }

        fs::write(&self.path, &self.contents)?;
        debug!(path = %self.path.display(), "journey map written");
        Ok(&self.path)
    }
}

/// Render the boxed route diagram followed by the branch listing.
pub fn render_map_text(graph: &StoryGraph) -> String {
    let mut lines = route_box(graph);
    lines.push(String::new());
    lines.push("Story branches:".to_string());
    lines.extend(branch_lines(graph));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// The framed title and landmark route.
fn route_box(graph: &StoryGraph) -> Vec<String> {
    let title = &graph.meta.title;
    let route = graph
        .meta
        .landmarks
        .iter()
        .map(|l| format!("{} ●", l.name))
        .collect::<Vec<_>>()
        .join("───");

    let inner = title.chars().count().max(route.chars().count()) + 4;
    let rule = "─".repeat(inner);
    let blank = " ".repeat(inner);

    let mut lines = vec![
        format!("  ┌{rule}┐"),
        format!("  │{title:^inner$}│"),
        format!("  ├{rule}┤"),
        format!("  │{blank}│"),
    ];
    if !route.is_empty() {
        lines.push(format!("  │  {route:<width$}│", width = inner - 2));
        lines.push(format!("  │{blank}│"));
    }
    lines.push(format!("  └{rule}┘"));
    lines
}

/// One line per edge, `[From] --key--> [To]`, in breadth-first order.
fn branch_lines(graph: &StoryGraph) -> Vec<String> {
    let mut lines = Vec::new();

    for id in graph.reachable() {
        let Some(node) = graph.node(id) else {
            continue;
        };

        if node.is_terminal() {
            lines.push(format!("  [{}] (ending)", node.title));
            continue;
        }

        for choice in &node.choices {
            let target = graph
                .node(&choice.target)
                .map_or(choice.target.as_str(), |n| n.title.as_str());
            lines.push(format!("  [{}] --{}--> [{target}]", node.title, choice.key));
        }
    }

    lines
}
