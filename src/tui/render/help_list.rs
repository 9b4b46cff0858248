use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::tui::app::{App, Mode};

/// Bindings shown in command mode
pub const COMMAND_HINTS: [&str; 11] = [
    "[Up] Move up",
    "[Down] Move down",
    "[q] Quit",
    "[a] Add",
    "[d] Delete",
    "[m] Mark",
    "[u] Unmark",
    "[f] Filter only done",
    "[n] Filter only not done",
    "[r] Remove filter",
    "[s] Save CSV",
];

/// Bindings shown while typing a new task
pub const ENTRY_HINTS: [&str; 1] = ["[Escape] Cancel"];

pub fn hints_for(mode: &Mode) -> &'static [&'static str] {
    match mode {
        Mode::Command => &COMMAND_HINTS,
        Mode::TextEntry { .. } => &ENTRY_HINTS,
    }
}

/// Render the command list for the current mode
pub fn render_help_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = hints_for(&app.mode)
        .iter()
        .map(|hint| ListItem::new(*hint))
        .collect();

    let block = Block::default()
        .title("Commands")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let list = List::new(items)
        .style(Style::default().fg(app.theme.text))
        .block(block);
    frame.render_widget(list, area);
}
