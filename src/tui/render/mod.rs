pub mod entry_box;
pub mod help_list;
pub mod status_row;
pub mod task_table;
#[cfg(test)]
pub mod test_helpers;
pub mod title_banner;

use ratatui::Frame;
use ratatui::layout::Rect;

use super::app::{App, Mode};

const PANEL_WIDTH: u16 = 50;

/// Where each panel goes for a given mode. `None` means the panel is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub title: Rect,
    pub help: Rect,
    pub table: Option<Rect>,
    pub entry: Option<Rect>,
    pub status: Rect,
}

/// Panel geometry as a function of the mode, clipped to `area`
pub fn panel_layout(mode: &Mode, area: Rect) -> PanelLayout {
    let panel = |y: u16, height: u16| {
        Rect::new(area.x, area.y.saturating_add(y), PANEL_WIDTH, height).intersection(area)
    };

    let (table, entry) = match mode {
        Mode::Command => (Some(panel(16, 20)), None),
        Mode::TextEntry { .. } => (None, Some(panel(16, 3))),
    };

    PanelLayout {
        title: panel(0, 3),
        help: panel(3, 13),
        table,
        entry,
        status: panel(36, 1),
    }
}

/// Main render function — draws every visible panel
pub fn render(frame: &mut Frame, app: &App) {
    let layout = panel_layout(&app.mode, frame.area());

    title_banner::render_title_banner(frame, app, layout.title);
    help_list::render_help_list(frame, app, layout.help);
    if let Some(area) = layout.table {
        task_table::render_task_table(frame, app, area);
    }
    if let Some(area) = layout.entry {
        entry_box::render_entry_box(frame, app, area);
    }
    if app.status.is_some() {
        status_row::render_status_row(frame, app, layout.status);
    }
}
