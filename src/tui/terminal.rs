//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are restored on exit and from a panic
//! hook.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::error::ReportError;
use crate::storage::RecordStore;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
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
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(store: &dyn RecordStore, settings: &Settings) -> Result<()> {
    tracing::info!("starting loan report TUI");
    let mut terminal = init_terminal()?;

    let mut app = App::new(store, settings);
    app.refresh();

    let events = EventHandler::default();
    let outcome = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    outcome
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events
            .next()
            .map_err(|_| ReportError::Tui("terminal event stream closed".into()))?;
        handle_event(app, event)?;

        if app.should_quit {
            return Ok(());
        }
    }
}
