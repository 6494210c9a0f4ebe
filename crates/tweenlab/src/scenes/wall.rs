//! Live wall clock, re-read from the system time every frame. The second
//! hand sweeps smoothly because the reading carries sub-second precision,
//! and the hour hand creeps with the minutes like a real dial.

use std::f64::consts::{FRAC_PI_2, TAU};

use chrono::{Local, Timelike};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{Paragraph, canvas::Canvas},
};
use tweenlab_core::{ClockTime, Point, clock_face_smooth};

use super::{canvas_size, flip_y, help_line, scene_chunks};
use crate::scenes::clock::draw_face;

/// How far out the hour labels sit, as a fraction of the dial radius.
const LABEL_RADIUS: f64 = 0.82;

pub fn render(frame: &mut Frame, area: Rect, show_help: bool) {
    let now = Local::now();
    let seconds =
        f64::from(now.second()) + f64::from(now.nanosecond().min(999_999_999)) / 1_000_000_000.0;
    let time = ClockTime::new(
        (now.hour() % 12) as i32,
        now.minute() as i32,
        seconds,
    );

    let (canvas_area, caption_area, help_area) = scene_chunks(area);
    let size = canvas_size(canvas_area);

    let Ok(face) = clock_face_smooth(time, size) else {
        return;
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, size.width])
        .y_bounds([0.0, size.height])
        .paint(|ctx| {
            draw_face(ctx, &face, size);
            // hour labels around the dial
            for n in 1..=12 {
                let angle = f64::from(n) / 12.0 * TAU - FRAC_PI_2;
                let pos = Point::new(
                    face.dial.center.x + angle.cos() * face.dial.radius * LABEL_RADIUS,
                    face.dial.center.y + angle.sin() * face.dial.radius * LABEL_RADIUS,
                );
                let (x, y) = flip_y(pos, size);
                ctx.print(x, y, Line::from(n.to_string().white()));
            }
        });
    frame.render_widget(canvas, canvas_area);

    let caption = Paragraph::new(now.format("%H:%M:%S").to_string())
        .style(Style::new().fg(Color::Yellow))
        .centered();
    frame.render_widget(caption, caption_area);

    if show_help {
        frame.render_widget(help_line(&[]), help_area);
    }
}
