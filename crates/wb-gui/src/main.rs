//! Route viewer window for Westbound, the macroquad entry point.
//!
//! Usage: `westbound-route --payload <json>`, where the payload is a
//! `RouteSummary`. Closes on a mouse click or Escape.

use std::process;
use std::sync::OnceLock;

use macroquad::prelude::*;

use wb_core::RouteSummary;
use wb_gui::scene::{CANVAS_H, CANVAS_W, CLOSE_HINT, RouteScene};
use wb_gui::theme::{
    DOT_RADIUS, LABEL_SIZE, LEGEND_LINE_H, LEGEND_SIZE, ROUTE_THICKNESS, TITLE_SIZE, palette,
};

/// The parsed payload, read before the window opens.
static SUMMARY: OnceLock<RouteSummary> = OnceLock::new();

/// Parse `--payload <json>` from the command line. Exits with status 2 on
/// a missing or malformed payload, before any window is created.
fn load_summary() -> &'static RouteSummary {
    SUMMARY.get_or_init(|| {
        let args: Vec<String> = std::env::args().collect();
        let Some(payload) = args
            .windows(2)
            .find(|w| w[0] == "--payload")
            .map(|w| w[1].clone())
        else {
            eprintln!("usage: westbound-route --payload <json>");
            process::exit(2);
        };

        match serde_json::from_str(&payload) {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!("error: invalid route payload: {e}");
                process::exit(2);
            }
        }
    })
}

fn window_conf() -> Conf {
    Conf {
        window_title: load_summary().title.clone(),
        window_width: CANVAS_W as i32,
        window_height: CANVAS_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let scene = RouteScene::from_summary(load_summary());

    loop {
        clear_background(palette::MIDNIGHT_BLUE);

        for pair in scene.points.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            draw_line(a.x, a.y, b.x, b.y, ROUTE_THICKNESS, palette::GOLD);
        }

        for point in &scene.points {
            draw_circle(point.x, point.y, DOT_RADIUS, palette::ORANGE);
            let width = measure_text(&point.name, None, LABEL_SIZE, 1.0).width;
            draw_text(
                &point.name,
                point.x - width / 2.0,
                point.y - DOT_RADIUS - 6.0,
                f32::from(LABEL_SIZE),
                palette::WHITE,
            );
        }

        let (tx, ty) = scene.title_origin();
        draw_text(&scene.title, tx, ty, TITLE_SIZE, palette::GOLD);

        let (lx, ly) = scene.legend_origin();
        for (i, line) in scene.legend.iter().enumerate() {
            draw_text(
                line,
                lx,
                ly + i as f32 * LEGEND_LINE_H,
                LEGEND_SIZE,
                palette::WHITE,
            );
        }

        let (hx, hy) = scene.hint_origin();
        draw_text(CLOSE_HINT, hx, hy, LEGEND_SIZE, palette::LIGHT_SKY_BLUE);

        if is_mouse_button_pressed(MouseButton::Left) || is_key_pressed(KeyCode::Escape) {
            break;
        }

        next_frame().await;
    }
}
