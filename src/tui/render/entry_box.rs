use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::app::App;

const CURSOR: &str = "\u{258C}"; // ▌

/// Longest suffix of `text` that fits in `max_width` columns
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = i;
    }
    &text[start..]
}

/// Render the text-entry box with the typed buffer and a cursor
pub fn render_entry_box(frame: &mut Frame, app: &App, area: Rect) {
    let buffer = app.input_buffer().unwrap_or_default();
    // Borders take two columns, the cursor one more
    let room = (area.width as usize).saturating_sub(3);

    let line = Line::from(vec![
        Span::styled(
            visible_tail(buffer, room),
            Style::default().fg(app.theme.text_bright),
        ),
        Span::styled(CURSOR, Style::default().fg(app.theme.highlight)),
    ]);

    let block = Block::default()
        .title("Input task")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
