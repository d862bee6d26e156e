//! Budget list with monthly utilization

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState},
    Frame,
};

use super::utilization_color;
use crate::display::report::format_bar;
use crate::finance::{budget_status, BudgetStatus};
use crate::storage::StateStore;
use crate::tui::app::App;

pub fn render<S: StateStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let style = app.style();
    let state = app.state();

    // Same order as state.budgets so the cursor lines up
    let statuses: Vec<BudgetStatus> = state
        .budgets
        .iter()
        .map(|b| budget_status(b, &state.transactions, app.month))
        .collect();

    let block = Block::default()
        .title(format!(" Budgets: {} ", app.month))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if statuses.is_empty() {
        let text = Paragraph::new("No budgets. Add one with `fintrack budget add`.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Category").style(bold),
        Cell::from("Budget").style(bold),
        Cell::from("Spent").style(bold),
        Cell::from("Remaining").style(bold),
        Cell::from("Used").style(bold),
        Cell::from(""),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = statuses
        .iter()
        .map(|s| {
            let color = utilization_color(s.ratio_percent);
            let remaining_color = if s.exceeded { Color::Red } else { Color::Green };

            Row::new(vec![
                Cell::from(s.category.clone()),
                Cell::from(style.amount(s.budgeted)),
                Cell::from(style.amount(s.spent)),
                Cell::from(style.amount(s.remaining)).style(Style::default().fg(remaining_color)),
                Cell::from(format!("{:.0}%", s.ratio_percent)).style(Style::default().fg(color)),
                Cell::from(format_bar(s.spent.min(s.budgeted), s.budgeted, 20))
                    .style(Style::default().fg(color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(6),
        Constraint::Min(20),
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
    table_state.select(Some(app.selected_budget));
    frame.render_stateful_widget(table, chunks[0], &mut table_state);

    if let Some(selected) = statuses.get(app.selected_budget) {
        let label = if selected.exceeded {
            format!(
                "{}: over by {}",
                selected.category,
                style.amount(-selected.remaining)
            )
        } else {
            format!("{}: {}% used", selected.category, selected.display_percent)
        };

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)))
            .gauge_style(Style::default().fg(utilization_color(selected.ratio_percent)))
            .percent(u16::from(selected.display_percent))
            .label(label);
        frame.render_widget(gauge, chunks[1]);
    }
}
