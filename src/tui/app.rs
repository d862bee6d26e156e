//! Dashboard state
//!
//! `App` holds the view selection and cursor positions. Data lives in the
//! store; the app only borrows it.

use crate::config::Settings;
use crate::display::AmountStyle;
use crate::models::{Month, Transaction};
use crate::storage::StateStore;
use crate::store::{Action, Outcome, State, Store};

/// Status messages disappear after this many ticks
const STATUS_TICKS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Overview,
    Transactions,
    Budgets,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [
        ActiveView::Overview,
        ActiveView::Transactions,
        ActiveView::Budgets,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Overview => "Overview",
            ActiveView::Transactions => "Transactions",
            ActiveView::Budgets => "Budgets",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ActiveView::Overview => 0,
            ActiveView::Transactions => 1,
            ActiveView::Budgets => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

pub struct App<'a, S: StateStore> {
    pub store: &'a mut Store<S>,
    pub settings: &'a Settings,
    pub should_quit: bool,
    pub active_view: ActiveView,
    /// Month shown by the overview and budget views
    pub month: Month,
    /// Cursor in the newest-first transaction list
    pub selected_transaction: usize,
    /// Cursor in the budget list
    pub selected_budget: usize,
    pub show_help: bool,
    pub status_message: Option<String>,
    status_ticks: u8,
}

impl<'a, S: StateStore> App<'a, S> {
    pub fn new(store: &'a mut Store<S>, settings: &'a Settings) -> Self {
        let mut app = Self {
            store,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            month: Month::current(),
            selected_transaction: 0,
            selected_budget: 0,
            show_help: false,
            status_message: None,
            status_ticks: 0,
        };
        app.collect_warnings();
        app
    }

    pub fn state(&self) -> &State {
        self.store.state()
    }

    pub fn style(&self) -> AmountStyle {
        AmountStyle::new(self.store.state(), self.settings)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Transactions in display order (newest first)
    pub fn visible_transactions(&self) -> Vec<&Transaction> {
        self.store.state().transactions_by_date()
    }

    fn list_len(&self) -> usize {
        match self.active_view {
            ActiveView::Overview => 0,
            ActiveView::Transactions => self.store.state().transactions.len(),
            ActiveView::Budgets => self.store.state().budgets.len(),
        }
    }

    fn cursor(&mut self) -> Option<&mut usize> {
        match self.active_view {
            ActiveView::Overview => None,
            ActiveView::Transactions => Some(&mut self.selected_transaction),
            ActiveView::Budgets => Some(&mut self.selected_budget),
        }
    }

    pub fn move_down(&mut self) {
        let len = self.list_len();
        if let Some(cursor) = self.cursor() {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }

    pub fn move_up(&mut self) {
        if let Some(cursor) = self.cursor() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    pub fn previous_month(&mut self) {
        self.month = self.month.prev();
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    /// Delete whatever the cursor points at in the active view
    pub fn delete_selected(&mut self) {
        match self.active_view {
            ActiveView::Overview => {}
            ActiveView::Transactions => {
                let target = self
                    .visible_transactions()
                    .get(self.selected_transaction)
                    .map(|t| (t.id, t.title.clone()));
                if let Some((id, title)) = target {
                    self.apply(Action::DeleteTransaction(id), format!("Deleted '{}'", title));
                }
            }
            ActiveView::Budgets => {
                let target = self
                    .state()
                    .budgets
                    .get(self.selected_budget)
                    .map(|b| (b.id, b.category.clone()));
                if let Some((id, category)) = target {
                    self.apply(
                        Action::DeleteBudget(id),
                        format!("Deleted {} budget", category),
                    );
                }
            }
        }
    }

    fn apply(&mut self, action: Action, done: String) {
        match self.store.dispatch(action) {
            Ok(Outcome::Applied) => self.set_status(done),
            Ok(Outcome::Unchanged) => self.set_status("Nothing changed"),
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
        self.clamp_cursors();
        self.collect_warnings();
    }

    fn clamp_cursors(&mut self) {
        let state = self.store.state();
        let last_txn = state.transactions.len().saturating_sub(1);
        let last_budget = state.budgets.len().saturating_sub(1);
        self.selected_transaction = self.selected_transaction.min(last_txn);
        self.selected_budget = self.selected_budget.min(last_budget);
    }

    /// Surface store warnings (journal or load problems) in the status bar
    fn collect_warnings(&mut self) {
        let warnings = self.store.take_warnings();
        if let Some(last) = warnings.last() {
            self.set_status(last.clone());
        }
    }
}
