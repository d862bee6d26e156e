//! Key binding overlay

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect;

const BINDINGS: [(&str, &str); 8] = [
    ("Tab / 1-3", "Switch view"),
    ("j / k", "Move selection"),
    ("[ / ]", "Previous / next month"),
    ("x", "Delete selected row"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
    ("Ctrl-C", "Quit"),
    ("", "Use the CLI to add or edit records"),
];

pub fn render(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>12}  ", key),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*desc),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
