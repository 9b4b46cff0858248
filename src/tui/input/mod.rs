mod command;
mod entry;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use command::handle_command;
use entry::handle_entry;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    log::trace!("key {:?} with modifiers {:?}", key.code, key.modifiers);
    app.status = None;

    // Ctrl+C arrives as a key in raw mode; it quits from any mode
    if is_interrupt(&key) {
        app.should_quit = true;
        return;
    }

    match &app.mode {
        Mode::Command => handle_command(app, key),
        Mode::TextEntry { .. } => handle_entry(app, key),
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}
