//! The scene list shown at startup.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
};

/// Menu entries in selection order; the key matches the digit row.
pub const ENTRIES: [(&str, &str); 7] = [
    ("1", "Polygon (animatable sides)"),
    ("2", "Polygon (sides & scale)"),
    ("3", "Vertex to vertex"),
    ("4", "Clock (tweened presets)"),
    ("5", "Clock (live)"),
    ("6", "Follow path"),
    ("7", "Flip card"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),                          // top padding
        Constraint::Length(2),                        // title
        Constraint::Length(ENTRIES.len() as u16),     // entries
        Constraint::Fill(1),                          // bottom padding
        Constraint::Length(1),                        // help
    ])
    .split(area);

    let title = Paragraph::new("tweenlab".bold().cyan()).alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let entries: Vec<Line> = ENTRIES
        .iter()
        .map(|(key, name)| {
            Line::from(vec![key.bold().cyan(), "  ".into(), (*name).white()]).centered()
        })
        .collect();
    frame.render_widget(Paragraph::new(entries), chunks[2]);

    let help = Line::from(vec![
        "1-7".bold().cyan(),
        " open scene  ".dark_gray(),
        "q".bold().cyan(),
        " quit".dark_gray(),
    ])
    .centered();
    frame.render_widget(help, chunks[4]);
}
