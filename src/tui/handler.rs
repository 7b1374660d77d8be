//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! dialog and input mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::reports::NavCommand;

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::EditingYear => handle_year_key(app, key),
        InputMode::GotoPage => handle_goto_key(app, key),
    }

    Ok(())
}

/// Alerts need an explicit acknowledgement; help closes on any key
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match &app.screen.active_dialog {
        ActiveDialog::Alert(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Pagination
        KeyCode::Left | KeyCode::Char('h') => app.navigate(NavCommand::Prev),
        KeyCode::Right | KeyCode::Char('l') => app.navigate(NavCommand::Next),
        KeyCode::Home | KeyCode::Char('g') => app.navigate(NavCommand::First),
        KeyCode::End | KeyCode::Char('G') => app.navigate(NavCommand::Last),
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_goto_digit(c),

        // Period selection
        KeyCode::Char('y') => app.begin_year_edit(),
        KeyCode::Char('m') => {
            app.next_month();
            app.set_status("Month changed, press r to apply");
        }
        KeyCode::Char('M') => {
            app.prev_month();
            app.set_status("Month changed, press r to apply");
        }
        KeyCode::Char('a') => {
            app.all_months();
            app.set_status("All months selected, press r to apply");
        }
        KeyCode::Char('r') | KeyCode::Enter => app.select_period(),

        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

/// Handle keys while the year field has focus
fn handle_year_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_year_edit(),
        KeyCode::Esc => app.cancel_year_edit(),
        KeyCode::Backspace => app.year_input.backspace(),
        KeyCode::Left => app.year_input.move_left(),
        KeyCode::Right => app.year_input.move_right(),
        KeyCode::Char(c) => app.year_input.insert(c),
        _ => {}
    }
}

/// Handle keys while a page number is being typed
fn handle_goto_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_goto_digit(c),
        KeyCode::Enter => app.commit_goto(),
        KeyCode::Backspace => app.pop_goto_digit(),
        KeyCode::Esc => app.cancel_goto(),
        _ => {}
    }
}
