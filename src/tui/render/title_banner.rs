use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

/// Render the "Todo App" banner
pub fn render_title_banner(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let paragraph = Paragraph::new("Todo App")
        .style(
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);
    frame.render_widget(paragraph, area);
}
