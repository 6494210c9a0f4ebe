//! Vertex-to-vertex scene: the polygon outline plus every diagonal that
//! skips at least one vertex, all regenerated from the tweened side count.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Paragraph, canvas::Canvas},
};
use tweenlab_anim::{Easing, Tween};
use tweenlab_core::{polygon_path, vertex_diagonals};

use super::{canvas_size, draw_outline, draw_segment, help_line, scene_chunks};

const MIN_SIDES: f64 = 1.0;
const MAX_SIDES: f64 = 30.0;

/// Adding or removing many diagonals reads better with a little extra time,
/// so presets here run longer than in the plain polygon scenes.
const EXTRA_DURATION_MS: u64 = 3000;

#[derive(Debug)]
pub struct VertexScene {
    sides: Tween<f64>,
}

impl VertexScene {
    pub fn new() -> Self {
        Self {
            sides: Tween::new(4.0),
        }
    }

    pub fn on_key(&mut self, ch: char, duration_ms: u64, easing: Easing, now_ms: u64) {
        let target = match ch {
            '1' => Some(1.0),
            '3' => Some(3.0),
            '7' => Some(7.0),
            '0' => Some(30.0),
            // nudge keys stand in for the original's slider
            '+' | '=' => Some((self.sides.target() + 1.0).min(MAX_SIDES)),
            '-' => Some((self.sides.target() - 1.0).max(MIN_SIDES)),
            _ => None,
        };
        if let Some(sides) = target {
            self.sides
                .retarget(sides, duration_ms + EXTRA_DURATION_MS, easing, now_ms);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, now_ms: u64, show_help: bool) {
        let sides = self.sides.value_at(now_ms);
        let (canvas_area, caption_area, help_area) = scene_chunks(area);
        let size = canvas_size(canvas_area);

        let vertices = polygon_path(sides, 1.0, size).unwrap_or_default();
        let diagonals = vertex_diagonals(&vertices);
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, size.width])
            .y_bounds([0.0, size.height])
            .paint(|ctx| {
                draw_outline(ctx, &vertices, size, Color::LightMagenta);
                for seg in &diagonals {
                    draw_segment(ctx, *seg, size, Color::LightMagenta);
                }
            });
        frame.render_widget(canvas, canvas_area);

        let caption = Paragraph::new(format!(
            "{} sides, {} diagonals",
            sides as i64,
            diagonals.len()
        ))
        .style(Style::new().fg(Color::LightMagenta))
        .centered();
        frame.render_widget(caption, caption_area);

        if show_help {
            frame.render_widget(
                help_line(&[("1/3/7/0", "side presets"), ("+/-", "nudge sides")]),
                help_area,
            );
        }
    }
}
