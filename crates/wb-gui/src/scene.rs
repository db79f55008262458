//! Layout of the route window, independent of macroquad.

use wb_core::{RouteStep, RouteSummary};

use crate::theme::LEGEND_LINE_H;

/// Window width in pixels; matches the landmark coordinate space.
pub const CANVAS_W: f32 = 900.0;
/// Window height in pixels.
pub const CANVAS_H: f32 = 520.0;
/// Legend lines longer than this are cut with an ellipsis.
pub const LEGEND_MAX: usize = 72;
/// Shown at the bottom of the window.
pub const CLOSE_HINT: &str = "Click anywhere in the window to close the route view.";

/// Left margin for the title, legend, and hint.
const MARGIN: f32 = 20.0;
/// Space kept free below the legend for the close hint.
const HINT_BAND: f32 = 50.0;

/// A landmark positioned in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePoint {
    /// Label drawn above the dot.
    pub name: String,
    /// Window x.
    pub x: f32,
    /// Window y, pointing down.
    pub y: f32,
}

/// Everything the window draws, already laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteScene {
    /// Window heading.
    pub title: String,
    /// Landmarks in travel order.
    pub points: Vec<ScenePoint>,
    /// Numbered legend lines.
    pub legend: Vec<String>,
}

impl RouteScene {
    /// Lay out a route summary.
    pub fn from_summary(summary: &RouteSummary) -> Self {
        let points = summary
            .landmarks
            .iter()
            .map(|l| {
                let (x, y) = to_screen(l.x, l.y);
                ScenePoint {
                    name: l.name.clone(),
                    x,
                    y,
                }
            })
            .collect();

        let legend = summary
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| legend_line(i, step))
            .collect();

        Self {
            title: summary.title.clone(),
            points,
            legend,
        }
    }

    /// Top-left baseline of the legend, placed so its last line sits just
    /// above the close hint. Long legends never start above the line below
    /// the title.
    pub fn legend_origin(&self) -> (f32, f32) {
        let height = self.legend.len() as f32 * LEGEND_LINE_H;
        let below_title = self.title_origin().1 + LEGEND_LINE_H;
        (MARGIN, (CANVAS_H - HINT_BAND - height).max(below_title))
    }

    /// Baseline of the close hint.
    pub fn hint_origin(&self) -> (f32, f32) {
        (MARGIN, CANVAS_H - MARGIN)
    }

    /// Baseline of the title.
    pub fn title_origin(&self) -> (f32, f32) {
        (MARGIN, MARGIN + 14.0)
    }
}

/// Map centred, y-up landmark coordinates to window pixels.
pub fn to_screen(x: f32, y: f32) -> (f32, f32) {
    (CANVAS_W / 2.0 + x, CANVAS_H / 2.0 - y)
}

fn legend_line(index: usize, step: &RouteStep) -> String {
    truncate(&format!("{}. {step}", index + 1), LEGEND_MAX)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use wb_core::Landmark;

    use super::*;

    fn summary(steps: usize) -> RouteSummary {
        RouteSummary {
            title: "Eli's Journey: Michigan to Las Vegas".to_string(),
            landmarks: vec![
                Landmark::new("Lansing", -320.0, 120.0),
                Landmark::new("Las Vegas", 230.0, -40.0),
            ],
            steps: (0..steps)
                .map(|i| RouteStep::new(format!("Node {i}"), "Keep going"))
                .collect(),
        }
    }

    #[test]
    fn landmarks_move_to_window_space() {
        let scene = RouteScene::from_summary(&summary(0));
        assert_eq!(
            scene.points[0],
            ScenePoint {
                name: "Lansing".to_string(),
                x: 130.0,
                y: 140.0
            }
        );
        assert_eq!((scene.points[1].x, scene.points[1].y), (680.0, 300.0));
    }

    #[test]
    fn legend_is_numbered() {
        let scene = RouteScene::from_summary(&summary(2));
        assert_eq!(scene.legend, vec!["1. Node 0: Keep going", "2. Node 1: Keep going"]);
    }

    #[test]
    fn legend_sits_above_hint() {
        let scene = RouteScene::from_summary(&summary(8));
        let (_, top) = scene.legend_origin();
        let bottom = top + (scene.legend.len() - 1) as f32 * LEGEND_LINE_H;
        assert!(bottom < scene.hint_origin().1);
    }

    #[test]
    fn long_legend_stays_below_title() {
        let scene = RouteScene::from_summary(&summary(30));
        let (_, top) = scene.legend_origin();
        assert!(top >= scene.title_origin().1 + LEGEND_LINE_H);
    }

    #[test]
    fn long_lines_are_truncated() {
        let long = "x".repeat(100);
        let cut = truncate(&long, LEGEND_MAX);
        assert_eq!(cut.chars().count(), LEGEND_MAX);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate("short", LEGEND_MAX), "short");
    }
}
