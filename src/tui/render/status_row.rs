use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the transient status message under the table
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let color = if status.is_error {
        app.theme.red
    } else {
        app.theme.dim
    };
    let paragraph = Paragraph::new(status.text.as_str()).style(Style::default().fg(color));
    frame.render_widget(paragraph, area);
}
