use crate::app::AppState;
use crate::domain::UiMode;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Form => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            false
        }
        KeyCode::Down => {
            app.move_selection_down();
            false
        }

        // Add to-do
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_todo();
            false
        }

        // Open the selected to-do for editing (restarts the focus timer)
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => {
            app.start_edit_todo(Instant::now());
            false
        }

        // Delete the selected to-do
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_todo();
            false
        }

        // Start/stop the focus timer
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_timer(Instant::now());
            false
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => true,

        _ => false,
    }
}

/// Handle keys while the add/edit form is open
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        // Save and close
        KeyCode::Enter => {
            app.save_todo();
            false
        }

        // Cancel without saving
        KeyCode::Esc => {
            app.close_form();
            false
        }

        // Switch between title and note
        KeyCode::Tab => {
            app.form_toggle_field();
            false
        }

        // Backspace
        KeyCode::Backspace => {
            app.form_backspace();
            false
        }

        // Add character
        KeyCode::Char(c) => {
            app.form_add_char(c);
            false
        }

        _ => false,
    }
}
