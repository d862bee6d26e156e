//! Status bar: currency, month, last message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::finance::currency_info;
use crate::storage::StateStore;
use crate::tui::app::App;

pub fn render<S: StateStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let code = app.state().currency();
    let currency = match currency_info(code) {
        Some(info) => format!("{} ({})", info.code, info.symbol),
        None => code.to_string(),
    };

    let mut spans = vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            currency,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(app.month.to_string(), Style::default().fg(Color::Cyan)),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
    }

    let hints = " j/k:Move  x:Delete  Tab:View  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
