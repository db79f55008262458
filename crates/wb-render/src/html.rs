//! HTML document with an inline SVG route map and a legend of the choices.

use std::fmt::Write;

use wb_core::RouteSummary;

/// Width of the SVG canvas, matching the landmark coordinate space.
const SVG_W: f32 = 900.0;
/// Height of the SVG canvas.
const SVG_H: f32 = 520.0;

/// Render `summary` as a standalone HTML page.
pub fn render_route_html(summary: &RouteSummary) -> String {
    let title = escape(&summary.title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    let _ = writeln!(html, "  <meta charset=\"utf-8\">\n  <title>{title}</title>");
    html.push_str("  <style>\n");
    html.push_str("    body { font-family: Arial, sans-serif; background: #0b1530; color: #f5f5f5; max-width: 960px; margin: 2em auto; padding: 0 1em; }\n");
    html.push_str("    h1 { color: #ffd700; }\n");
    html.push_str("    svg { width: 100%; height: auto; border-radius: 8px; }\n");
    html.push_str("    ol { line-height: 1.6; }\n");
    html.push_str("    .node { color: #87cefa; font-weight: bold; }\n");
    html.push_str("  </style>\n</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{title}</h1>");

    html.push_str(&render_svg(summary));

    if !summary.steps.is_empty() {
        html.push_str("<h2>Choices along the way</h2>\n<ol>\n");
        for step in &summary.steps {
            let _ = writeln!(
                html,
                "  <li><span class=\"node\">{}</span>: {}</li>",
                escape(&step.title),
                escape(&step.description)
            );
        }
        html.push_str("</ol>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Render the landmark route as SVG. Landmark y points up; SVG y points down.
pub fn render_svg(summary: &RouteSummary) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {SVG_W} {SVG_H}\" role=\"img\">",
        -SVG_W / 2.0,
        -SVG_H / 2.0
    );
    let _ = writeln!(
        svg,
        "  <rect x=\"{}\" y=\"{}\" width=\"{SVG_W}\" height=\"{SVG_H}\" fill=\"#191970\"/>",
        -SVG_W / 2.0,
        -SVG_H / 2.0
    );

    if summary.landmarks.len() > 1 {
        let points = summary
            .landmarks
            .iter()
            .map(|l| format!("{},{}", l.x, -l.y))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            svg,
            "  <polyline points=\"{points}\" fill=\"none\" stroke=\"#ffd700\" stroke-width=\"4\" stroke-linejoin=\"round\"/>"
        );
    }

    for landmark in &summary.landmarks {
        let (x, y) = (landmark.x, -landmark.y);
        let _ = writeln!(
            svg,
            "  <circle cx=\"{x}\" cy=\"{y}\" r=\"8\" fill=\"#ffa500\"/>"
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{x}\" y=\"{}\" fill=\"#ffffff\" font-size=\"14\" font-weight=\"bold\" text-anchor=\"middle\">{}</text>",
            y - 16.0,
            escape(&landmark.name)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape text for use in HTML element content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
