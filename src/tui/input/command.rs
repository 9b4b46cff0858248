use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::TaskStatus;
use crate::tui::app::App;

pub(super) fn handle_command(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Up => app.view.move_up(),
        KeyCode::Down => app.view.move_down(&app.store),
        KeyCode::Char('d') => {
            if let Some(task) = app.view.delete_selected(&mut app.store) {
                log::debug!("deleted task {}", task.name);
            }
        }
        KeyCode::Char('m') => {
            app.view.set_selected_status(&mut app.store, TaskStatus::Done);
        }
        KeyCode::Char('u') => {
            app.view.set_selected_status(&mut app.store, TaskStatus::Todo);
        }
        KeyCode::Char('f') => app.view.show_only(TaskStatus::Done),
        KeyCode::Char('n') => app.view.show_only(TaskStatus::Todo),
        KeyCode::Char('r') => app.view.show_all(),
        KeyCode::Char('s') => save(app),
        KeyCode::Char('a') => app.enter_text_entry(),
        _ => {}
    }
}

fn save(app: &mut App) {
    match app.save() {
        Ok(count) => {
            log::info!("saved {} tasks to {}", count, app.store_path().display());
            let noun = if count == 1 { "task" } else { "tasks" };
            app.set_status(format!("Saved {} {}", count, noun));
        }
        Err(e) => {
            log::error!("save to {} failed: {}", app.store_path().display(), e);
            app.set_error(format!("Save failed: {}", e));
        }
    }
}
