//! Terminal setup and teardown
//!
//! Installs a panic hook so a crash never leaves the terminal in raw mode.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::storage::StateStore;
use crate::store::Store;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_key_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui<S: StateStore>(store: &mut Store<S>, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, store, settings);
    restore_terminal()?;
    result
}

fn event_loop<S: StateStore>(
    terminal: &mut Tui,
    store: &mut Store<S>,
    settings: &Settings,
) -> Result<()> {
    let mut app = App::new(store, settings);
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &mut app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.tick(),
        }
    }

    Ok(())
}
