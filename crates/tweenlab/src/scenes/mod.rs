//! The demo scenes of the gallery, one module per screen.

pub mod clock;
pub mod flip;
pub mod follow;
pub mod menu;
pub mod polygon;
pub mod vertex;
pub mod wall;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    text::Line,
    widgets::canvas::{Context, Line as CanvasLine, Points},
};
use tweenlab_core::{Point, Segment, Size};

/// Logical canvas size for a screen area. The height doubles because
/// terminal cells are roughly twice as tall as they are wide, so shapes
/// come out round instead of squashed.
pub fn canvas_size(area: Rect) -> Size {
    Size::new(f64::from(area.width), f64::from(area.height) * 2.0)
}

/// Geometry uses screen-style y-down coordinates; the canvas grows upward.
pub fn flip_y(p: Point, size: Size) -> (f64, f64) {
    (p.x, size.height - p.y)
}

/// Split a scene area into canvas, caption and key-hint rows.
pub fn scene_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),   // canvas
        Constraint::Length(1), // caption
        Constraint::Length(1), // key hints
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Draw a geometry segment onto the canvas.
pub fn draw_segment(ctx: &mut Context, seg: Segment, size: Size, color: Color) {
    let (x1, y1) = flip_y(seg.from, size);
    let (x2, y2) = flip_y(seg.to, size);
    ctx.draw(&CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color,
    });
}

/// Draw a closed outline through `points`. A single point still gets a dot,
/// so degenerate polygons (side counts below 1) remain visible.
pub fn draw_outline(ctx: &mut Context, points: &[Point], size: Size, color: Color) {
    if points.len() < 2 {
        if let Some(&p) = points.first() {
            ctx.draw(&Points {
                coords: &[flip_y(p, size)],
                color,
            });
        }
        return;
    }
    for pair in points.windows(2) {
        draw_segment(
            ctx,
            Segment {
                from: pair[0],
                to: pair[1],
            },
            size,
            color,
        );
    }
    draw_segment(
        ctx,
        Segment {
            from: points[points.len() - 1],
            to: points[0],
        },
        size,
        color,
    );
}

/// Build the key-hint line shown at the bottom of a scene.
pub fn help_line(entries: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec!["esc".bold().cyan(), " menu  ".dark_gray()];
    for (key, what) in entries {
        spans.push((*key).bold().cyan());
        spans.push(format!(" {what}  ").dark_gray());
    }
    spans.push("q".bold().cyan());
    spans.push(" quit".dark_gray());
    Line::from(spans).centered()
}
