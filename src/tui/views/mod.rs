//! Dashboard views
//!
//! Every view renders from a snapshot of the store; none of them mutate it.

pub mod budgets;
pub mod help;
pub mod overview;
pub mod status_bar;
pub mod transactions;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveView, App};
use super::layout::AppLayout;
use crate::storage::StateStore;

pub fn render<S: StateStore>(frame: &mut Frame, app: &mut App<S>) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Overview => overview::render(frame, app, layout.main),
        ActiveView::Transactions => transactions::render(frame, app, layout.main),
        ActiveView::Budgets => budgets::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.show_help {
        help::render(frame);
    }
}

fn render_tabs<S: StateStore>(frame: &mut Frame, app: &App<S>, area: ratatui::layout::Rect) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!(" {}:{} ", i + 1, view.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" fintrack ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(app.active_view.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Green under budget, yellow close to it, red over
pub(crate) fn utilization_color(percent: f64) -> Color {
    if percent > 100.0 {
        Color::Red
    } else if percent >= 80.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}
