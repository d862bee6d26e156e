//! Transaction list, newest first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::report::truncate;
use crate::storage::StateStore;
use crate::tui::app::App;

pub fn render<S: StateStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let style = app.style();
    let transactions = app.visible_transactions();

    let block = Block::default()
        .title(format!(" Transactions ({}) ", transactions.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions. Add one with `fintrack transaction add`.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Title").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let (sign, color) = if txn.is_income() {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            Row::new(vec![
                Cell::from(style.date(&txn.date)),
                Cell::from(truncate(&txn.title, 30)),
                Cell::from(txn.category.clone()),
                Cell::from(format!("{}{}", sign, style.amount(txn.amount.value())))
                    .style(Style::default().fg(color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    table_state.select(Some(app.selected_transaction));

    frame.render_stateful_widget(table, area, &mut table_state);
}
