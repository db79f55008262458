//! End-of-story recap of the choices made.

use std::io::{self, Write};

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use wb_core::StoryGraph;
use wb_fiction::{Ending, SessionState};

/// Print how the session ended and the choices that led there.
pub fn print(out: &mut impl Write, graph: &StoryGraph, session: &SessionState) -> io::Result<()> {
    let headline = match session.ending() {
        Some(Ending::Reached { node }) => {
            let title = graph.node(&node).map_or(node.as_str(), |n| n.title.as_str());
            format!("Ending reached: {title}").green().bold()
        }
        Some(Ending::Quit) | None => "Journey left unfinished".yellow().bold(),
    };
    writeln!(out, "  {headline}")?;

    if session.taken().is_empty() {
        writeln!(out, "  {}", "(no choices made)".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Where", "Choice"]);
    for (i, step) in session.taken().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            step.title.clone(),
            step.description.clone(),
        ]);
    }

    writeln!(out, "{table}")?;
    writeln!(
        out,
        "  {} choice{} made",
        session.taken().len(),
        if session.taken().len() == 1 { "" } else { "s" }
    )
}
