//! Key handling for the dashboard

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveView, App};
use crate::storage::StateStore;

pub fn handle_key_event<S: StateStore>(app: &mut App<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // The help overlay swallows everything except its own close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Tab => app.switch_view(app.active_view.next()),
        KeyCode::Char('1') => app.switch_view(ActiveView::Overview),
        KeyCode::Char('2') => app.switch_view(ActiveView::Transactions),
        KeyCode::Char('3') => app.switch_view(ActiveView::Budgets),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('[') => app.previous_month(),
        KeyCode::Char(']') => app.next_month(),

        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::MemoryStateStore;
    use crate::store::Store;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut store = Store::open(MemoryStateStore::new(), &Settings::default(), None);
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);

        app.should_quit = false;
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_view_switching() {
        let mut store = Store::open(MemoryStateStore::new(), &Settings::default(), None);
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        handle_key_event(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.active_view, ActiveView::Budgets);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_view, ActiveView::Overview);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_view, ActiveView::Transactions);
    }

    #[test]
    fn test_navigate_and_delete_budget() {
        let mut store = Store::open(MemoryStateStore::new(), &Settings::default(), None);
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        handle_key_event(&mut app, press(KeyCode::Char('3')));
        handle_key_event(&mut app, press(KeyCode::Char('j')));
        handle_key_event(&mut app, press(KeyCode::Char('x')));

        let remaining: Vec<_> = app.state().budgets.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(remaining, vec!["Food"]);
    }

    #[test]
    fn test_help_overlay_blocks_actions() {
        let mut store = Store::open(MemoryStateStore::new(), &Settings::default(), None);
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        handle_key_event(&mut app, press(KeyCode::Char('2')));
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        handle_key_event(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.state().transactions.len(), 6);

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_delete_on_overview_is_ignored() {
        let mut store = Store::open(MemoryStateStore::new(), &Settings::default(), None);
        let settings = Settings::default();
        let mut app = App::new(&mut store, &settings);

        handle_key_event(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.state().transactions.len(), 6);
        assert_eq!(app.state().budgets.len(), 2);
    }
}
