//! Animatable polygon scenes.
//!
//! The side count (and, in the second scene, the scale) tween between
//! presets while the outline is regenerated every frame, so the shape grows
//! a foreshortened partial edge whenever the count is fractional.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Paragraph, canvas::Canvas},
};
use tweenlab_anim::{Easing, Tween};
use tweenlab_core::polygon_path;

use super::{canvas_size, draw_outline, help_line, scene_chunks};

/// Side-count presets bound to the number keys (0 stands in for 30).
fn preset_sides(ch: char) -> Option<f64> {
    match ch {
        '1' => Some(1.0),
        '3' => Some(3.0),
        '7' => Some(7.0),
        '0' => Some(30.0),
        _ => None,
    }
}

/// Polygon with a tweened side count.
#[derive(Debug)]
pub struct PolygonScene {
    sides: Tween<f64>,
}

impl PolygonScene {
    pub fn new() -> Self {
        Self {
            sides: Tween::new(4.0),
        }
    }

    pub fn on_key(&mut self, ch: char, duration_ms: u64, easing: Easing, now_ms: u64) {
        if let Some(sides) = preset_sides(ch) {
            self.sides.retarget(sides, duration_ms, easing, now_ms);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, now_ms: u64, show_help: bool) {
        let sides = self.sides.value_at(now_ms);
        let (canvas_area, caption_area, help_area) = scene_chunks(area);
        let size = canvas_size(canvas_area);

        let vertices = polygon_path(sides, 1.0, size).unwrap_or_default();
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, size.width])
            .y_bounds([0.0, size.height])
            .paint(|ctx| draw_outline(ctx, &vertices, size, Color::Blue));
        frame.render_widget(canvas, canvas_area);

        let caption = Paragraph::new(format!("{} sides", sides as i64))
            .style(Style::new().fg(Color::Blue))
            .centered();
        frame.render_widget(caption, caption_area);

        if show_help {
            frame.render_widget(help_line(&[("1/3/7/0", "side presets")]), help_area);
        }
    }
}

/// Polygon with side count and scale tweened as a pair, so both parameters
/// travel together under one easing curve.
#[derive(Debug)]
pub struct PolygonScaleScene {
    params: Tween<(f64, f64)>,
}

impl PolygonScaleScene {
    pub fn new() -> Self {
        Self {
            params: Tween::new((4.0, 1.0)),
        }
    }

    pub fn on_key(&mut self, ch: char, duration_ms: u64, easing: Easing, now_ms: u64) {
        // each preset pairs a side count with its own scale
        let target = match ch {
            '1' => Some((1.0, 1.0)),
            '3' => Some((3.0, 0.7)),
            '7' => Some((7.0, 0.4)),
            '0' => Some((30.0, 1.0)),
            _ => None,
        };
        if let Some(target) = target {
            self.params.retarget(target, duration_ms, easing, now_ms);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, now_ms: u64, show_help: bool) {
        let (sides, scale) = self.params.value_at(now_ms);
        let (canvas_area, caption_area, help_area) = scene_chunks(area);
        let size = canvas_size(canvas_area);

        let vertices = polygon_path(sides, scale, size).unwrap_or_default();
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, size.width])
            .y_bounds([0.0, size.height])
            .paint(|ctx| draw_outline(ctx, &vertices, size, Color::Magenta));
        frame.render_widget(canvas, canvas_area);

        let caption = Paragraph::new(format!("{} sides, {scale:.2} scale", sides as i64))
            .style(Style::new().fg(Color::Magenta))
            .centered();
        frame.render_widget(caption, caption_area);

        if show_help {
            frame.render_widget(help_line(&[("1/3/7/0", "sides & scale presets")]), help_area);
        }
    }
}
