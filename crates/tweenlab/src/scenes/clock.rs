//! Tweened clock scene: the face animates between preset readings, with the
//! hands sweeping through every in-between position via ClockTime
//! arithmetic (jump a reading forward ten minutes and the minute hand
//! travels the long way round).

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        Paragraph,
        canvas::{Canvas, Circle as CanvasCircle},
    },
};
use tweenlab_anim::{Easing, Tween};
use tweenlab_core::{ClockFace, ClockTime, Size, clock_face};

use super::{canvas_size, draw_segment, flip_y, help_line, scene_chunks};

/// Preset readings with their transition durations.
const PRESETS: [(char, ClockTime, u64); 4] = [
    ('1', ClockTime::new(9, 51, 45.0), 2000),
    ('2', ClockTime::new(9, 51, 15.0), 2000),
    ('3', ClockTime::new(9, 52, 15.0), 2000),
    ('4', ClockTime::new(10, 1, 45.0), 10_000),
];

#[derive(Debug)]
pub struct TweenClockScene {
    time: Tween<ClockTime>,
}

impl TweenClockScene {
    pub fn new() -> Self {
        Self {
            time: Tween::new(ClockTime::new(9, 50, 5.0)),
        }
    }

    pub fn on_key(&mut self, ch: char, easing: Easing, now_ms: u64) {
        if let Some(&(_, target, duration_ms)) = PRESETS.iter().find(|(key, _, _)| *key == ch) {
            self.time.retarget(target, duration_ms, easing, now_ms);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, now_ms: u64, show_help: bool) {
        let time = self.time.value_at(now_ms);
        let (canvas_area, caption_area, help_area) = scene_chunks(area);
        let size = canvas_size(canvas_area);

        let Ok(face) = clock_face(time, size) else {
            return;
        };

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, size.width])
            .y_bounds([0.0, size.height])
            .paint(|ctx| draw_face(ctx, &face, size));
        frame.render_widget(canvas, canvas_area);

        let caption = Paragraph::new(time.to_string())
            .style(Style::new().fg(Color::Blue))
            .centered();
        frame.render_widget(caption, caption_area);

        if show_help {
            frame.render_widget(
                help_line(&[("1-4", "9:51:45 / 9:51:15 / 9:52:15 / 10:01:45")]),
                help_area,
            );
        }
    }
}

/// Draw a clock face: blue dial, white hour and minute hands, yellow second
/// hand.
pub fn draw_face(ctx: &mut ratatui::widgets::canvas::Context, face: &ClockFace, size: Size) {
    let (cx, cy) = flip_y(face.dial.center, size);
    ctx.draw(&CanvasCircle {
        x: cx,
        y: cy,
        radius: face.dial.radius,
        color: Color::Blue,
    });
    draw_segment(ctx, face.hour, size, Color::White);
    draw_segment(ctx, face.minute, size, Color::White);
    draw_segment(ctx, face.second, size, Color::Yellow);
}
