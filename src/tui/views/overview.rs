//! Overview: totals, budget health and month-over-month change

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::utilization_color;
use crate::display::report::format_change;
use crate::display::AmountStyle;
use crate::reports::{BudgetOverview, FinancialSummary, MonthComparison};
use crate::storage::StateStore;
use crate::tui::app::App;
use crate::tui::layout::OverviewLayout;

pub fn render<S: StateStore>(frame: &mut Frame, app: &mut App<S>, area: Rect) {
    let layout = OverviewLayout::new(area);
    let style = app.style();
    let state = app.state();

    let summary = FinancialSummary::generate(state);
    render_summary(frame, &summary, &style, layout.summary);

    let overview = BudgetOverview::generate(state, app.month);
    render_budget_health(frame, &overview, &style, layout.budgets);

    let comparison = MonthComparison::generate(state, app.month);
    render_comparison(frame, &comparison, &style, layout.comparison);
}

fn render_summary(frame: &mut Frame, summary: &FinancialSummary, style: &AmountStyle, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let balance_color = if summary.balance < 0.0 {
        Color::Red
    } else {
        Color::Green
    };

    let entries = [
        ("Total Income", summary.total_income, Color::Green),
        ("Total Expenses", summary.total_expenses, Color::Red),
        ("Balance", summary.balance, balance_color),
    ];

    for ((title, value, color), card) in entries.into_iter().zip(cards.iter()) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                style.amount(value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .alignment(ratatui::layout::Alignment::Center),
            *card,
        );
    }
}

fn render_budget_health(
    frame: &mut Frame,
    overview: &BudgetOverview,
    style: &AmountStyle,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" Budgets: {} ", overview.month))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Budgeted  "),
            Span::styled(style.amount(overview.total_budget), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Spent     "),
            Span::styled(
                style.amount(overview.spent),
                Style::default().fg(utilization_color(overview.utilization)),
            ),
            Span::styled(
                format!("  ({:.1}%)", overview.utilization),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw("Remaining "),
            Span::raw(style.amount(overview.remaining)),
        ]),
        Line::from(""),
    ];

    let exceeded = overview.exceeded();
    if exceeded.is_empty() {
        lines.push(Line::from(Span::styled(
            "All budgets on track",
            Style::default().fg(Color::Green),
        )));
    } else {
        for status in exceeded {
            lines.push(Line::from(Span::styled(
                format!(
                    "Over budget: {} by {}",
                    status.category,
                    style.amount(-status.remaining)
                ),
                Style::default().fg(Color::Red),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_comparison(
    frame: &mut Frame,
    comparison: &MonthComparison,
    style: &AmountStyle,
    area: Rect,
) {
    let block = Block::default()
        .title(format!(" {} vs {} ", comparison.current, comparison.previous))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    // Rising income is good news, rising expenses are not
    let change_span = |pct: f64, rising_is_good: bool| {
        let good = (pct >= 0.0) == rising_is_good;
        Span::styled(
            format!("  {}", format_change(pct)),
            Style::default().fg(if good { Color::Green } else { Color::Red }),
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            "Income",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(style.amount(comparison.current_income)),
            change_span(comparison.income_change, true),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Expenses",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(style.amount(comparison.current_expenses)),
            change_span(comparison.expense_change, false),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
