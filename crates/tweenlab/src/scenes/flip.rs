//! Flip-card scene: a card outline spins about a diagonal axis under a
//! perspective projection. Noticing the card pass edge-on happens while
//! rendering, so the face change is queued as a command and committed by
//! the app between frames.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{Paragraph, canvas::Canvas},
};
use tweenlab_anim::{CommandQueue, flip_transform};
use tweenlab_core::Point;

use super::{canvas_size, draw_outline, flip_y, help_line, scene_chunks};
use crate::AppCommand;

/// Card faces cycled while the back is toward the viewer.
const FACES: [&str; 6] = ["7♦", "8♣", "6♦", "J♣", "2♥", "J♦"];

/// One full revolution of the card.
const SPIN_MS: u64 = 4000;

/// Diagonal rotation axis, matching the tumbling-card look.
const AXIS: (f64, f64, f64) = (1.0, 1.0, 0.0);

#[derive(Debug)]
pub struct FlipScene {
    /// Whether the back of the card is toward the viewer. Only ever written
    /// through [`FlipScene::set_flipped`], between frames.
    flipped: bool,
    face_index: usize,
}

impl FlipScene {
    pub fn new() -> Self {
        Self {
            flipped: false,
            face_index: 0,
        }
    }

    /// Applied by the app when it drains the command queue. The face only
    /// advances on the front-to-back crossing, while it is hidden.
    pub fn set_flipped(&mut self, flipped: bool) {
        if !self.flipped && flipped {
            self.face_index = (self.face_index + 1) % FACES.len();
        }
        self.flipped = flipped;
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        now_ms: u64,
        show_help: bool,
        commands: &mut CommandQueue<AppCommand>,
    ) {
        let (canvas_area, caption_area, help_area) = scene_chunks(area);
        let size = canvas_size(canvas_area);

        let angle_deg = (now_ms % SPIN_MS) as f64 / SPIN_MS as f64 * 360.0;
        let showing_back = (90.0..270.0).contains(&angle_deg);
        if showing_back != self.flipped {
            commands.push(AppCommand::CardFlipped(showing_back));
        }

        let flip = flip_transform(angle_deg.to_radians(), AXIS, size);

        // card in the middle of the rect at a 2:3 aspect
        let center = size.center();
        let half_h = size.height * 0.35;
        let half_w = half_h * 2.0 / 3.0;
        let corners = [
            Point::new(center.x - half_w, center.y - half_h),
            Point::new(center.x + half_w, center.y - half_h),
            Point::new(center.x + half_w, center.y + half_h),
            Point::new(center.x - half_w, center.y + half_h),
        ];
        let projected: Vec<Point> = corners.iter().map(|&p| flip.project(p)).collect();

        let (color, label) = if showing_back {
            (Color::DarkGray, "░░")
        } else {
            (Color::Green, FACES[self.face_index])
        };

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, size.width])
            .y_bounds([0.0, size.height])
            .paint(|ctx| {
                draw_outline(ctx, &projected, size, color);
                let (x, y) = flip_y(center, size);
                ctx.print(x, y, Line::from(label.fg(color)));
            });
        frame.render_widget(canvas, canvas_area);

        let caption = Paragraph::new(format!("face {} of {}", self.face_index + 1, FACES.len()))
            .style(Style::new().fg(Color::Green))
            .centered();
        frame.render_widget(caption, caption_area);

        if show_help {
            frame.render_widget(help_line(&[]), help_area);
        }
    }
}
