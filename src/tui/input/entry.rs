use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_text_entry(),
        KeyCode::Enter => app.commit_text_entry(),
        KeyCode::Backspace => {
            if let Mode::TextEntry { buffer } = &mut app.mode {
                buffer.pop();
            }
        }
        // Space arrives as Char(' ') and takes this path too
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if let Mode::TextEntry { buffer } = &mut app.mode {
                buffer.push(c);
            }
        }
        _ => {}
    }
}
