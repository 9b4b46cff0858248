use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

use crate::tui::app::App;

/// Column labels; always the first rendered row
pub const HEADER: [&str; 2] = ["task", "status"];

/// Render the task table, highlighting the selected row
pub fn render_task_table(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .rows()
        .into_iter()
        .filter_map(|index| app.store.get(index))
        .map(|task| {
            Row::new(vec![
                Cell::from(Line::from(task.name.as_str()).centered()),
                Cell::from(Line::from(task.status.as_str()).centered())
                    .style(Style::default().fg(app.theme.status_color(task.status))),
            ])
        })
        .collect();

    let header = Row::new(HEADER.map(|label| Cell::from(Line::from(label).centered())))
        .style(
            Style::default()
                .fg(app.theme.dim)
                .add_modifier(Modifier::BOLD),
        );

    let selected = if rows.is_empty() {
        None
    } else {
        Some(app.view.selected() - 1)
    };
    let mut state = TableState::default().with_selected(selected);

    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let table = Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
        .header(header)
        .style(Style::default().fg(app.theme.text))
        .row_highlight_style(app.theme.selected_row())
        .block(block);

    frame.render_stateful_widget(table, area, &mut state);
}
