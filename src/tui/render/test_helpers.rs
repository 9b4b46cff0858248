use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store_io::{STORE_FILE, TaskFile};
use crate::model::store::TaskStore;
use crate::model::task::{Task, TaskStatus};
use crate::tui::app::App;
use crate::tui::input::handle_key;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 40;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over a temp task file. Keep the TempDir alive for as long
/// as the App is used.
pub fn app_with_tasks(tasks: &[(&str, TaskStatus)]) -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let file = TaskFile::open(&dir.path().join(STORE_FILE)).unwrap();
    let store: TaskStore = tasks
        .iter()
        .map(|(name, status)| Task {
            name: name.to_string(),
            status: *status,
        })
        .collect::<Vec<_>>()
        .into();
    (App::new(store, file, Theme::default()), dir)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Feed each character of `text` through the full key dispatcher
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key(app, key(KeyCode::Char(c)));
    }
}
