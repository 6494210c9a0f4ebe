//! Follow-path scene: a marker loops the infinity curve, positioned by
//! arc-length sampling and rotated to face its direction of travel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    widgets::{Paragraph, canvas::Canvas},
};
use tweenlab_core::{PathSample, Point, Segment, Size, infinity_path};

use super::{canvas_size, draw_segment, help_line, scene_chunks};

/// One full lap around the curve.
const LOOP_MS: u64 = 8000;

/// Barb angle of the arrowhead marker, radians off the tangent.
const BARB_SPREAD: f64 = 0.5;

pub fn render(frame: &mut Frame, area: Rect, now_ms: u64, show_help: bool, trail: bool) {
    let (canvas_area, caption_area, help_area) = scene_chunks(area);
    let size = canvas_size(canvas_area);

    let Ok(path) = infinity_path(size) else {
        return;
    };
    let t = (now_ms % LOOP_MS) as f64 / LOOP_MS as f64;
    let sample = path.sample(t);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, size.width])
        .y_bounds([0.0, size.height])
        .paint(|ctx| {
            if trail {
                // skipping every other flattened segment fakes a dashed stroke
                for (idx, pair) in path.points().windows(2).enumerate() {
                    if idx % 2 == 0 {
                        draw_segment(
                            ctx,
                            Segment {
                                from: pair[0],
                                to: pair[1],
                            },
                            size,
                            Color::Magenta,
                        );
                    }
                }
            }
            draw_marker(ctx, sample, size);
        });
    frame.render_widget(canvas, canvas_area);

    let caption = Paragraph::new(format!("t = {t:.2}"))
        .style(Style::new().fg(Color::Magenta))
        .centered();
    frame.render_widget(caption, caption_area);

    if show_help {
        frame.render_widget(help_line(&[]), help_area);
    }
}

/// Draw an arrowhead at the sample, tip forward along the tangent.
fn draw_marker(ctx: &mut ratatui::widgets::canvas::Context, sample: PathSample, size: Size) {
    let length = size.min_side() / 10.0;
    let tip = sample.position;
    let barb = |spread: f64| {
        let angle = sample.tangent_angle + spread;
        Point::new(tip.x - angle.cos() * length, tip.y - angle.sin() * length)
    };
    let left = barb(BARB_SPREAD);
    let right = barb(-BARB_SPREAD);
    draw_segment(ctx, Segment { from: tip, to: left }, size, Color::Red);
    draw_segment(
        ctx,
        Segment {
            from: tip,
            to: right,
        },
        size,
        Color::Red,
    );
    draw_segment(
        ctx,
        Segment {
            from: left,
            to: right,
        },
        size,
        Color::Red,
    );
}
