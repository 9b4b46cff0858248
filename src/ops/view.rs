use crate::model::store::{TaskIndex, TaskStore};
use crate::model::task::{Task, TaskStatus};

/// Which tasks the table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == status,
        }
    }
}

/// The rows currently shown, as store indices in store order.
///
/// Recomputed from scratch on every call; never cached, so it cannot drift
/// from the store.
pub fn visible_rows(store: &TaskStore, filter: StatusFilter) -> Vec<TaskIndex> {
    store
        .snapshot()
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task))
        .map(|(i, _)| TaskIndex(i))
        .collect()
}

/// Active filter plus the selection pointer.
///
/// `selected` counts rendered rows with the header at 0, so the first task
/// row is 1. It stays in `[1, max(1, rows)]`; when there are no rows it is
/// 1 and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    filter: StatusFilter,
    selected: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            filter: StatusFilter::All,
            selected: 1,
        }
    }
}

impl ViewState {
    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn rows(&self, store: &TaskStore) -> Vec<TaskIndex> {
        visible_rows(store, self.filter)
    }

    pub fn show_all(&mut self) {
        self.set_filter(StatusFilter::All);
    }

    pub fn show_only(&mut self, status: TaskStatus) {
        self.set_filter(StatusFilter::Only(status));
    }

    fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.selected = 1;
    }

    /// Translate the selected row into the task it shows
    pub fn selected_task(&self, store: &TaskStore) -> Option<TaskIndex> {
        self.rows(store).get(self.selected - 1).copied()
    }

    pub fn move_up(&mut self) {
        if self.selected > 1 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self, store: &TaskStore) {
        if self.selected < self.rows(store).len() {
            self.selected += 1;
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected = 1;
    }

    /// Pull the pointer back inside the current row set
    pub fn clamp(&mut self, store: &TaskStore) {
        let rows = self.rows(store).len();
        self.selected = self.selected.clamp(1, rows.max(1));
    }

    /// Delete the task under the pointer and step the pointer back one row
    /// (unless it is already on the first row). Does nothing when the view
    /// is empty.
    pub fn delete_selected(&mut self, store: &mut TaskStore) -> Option<Task> {
        let index = self.selected_task(store)?;
        let removed = store.delete(index)?;
        if self.selected != 1 {
            self.selected -= 1;
        }
        self.clamp(store);
        Some(removed)
    }

    /// Set the status of the task under the pointer. Returns false when the
    /// view is empty.
    pub fn set_selected_status(&mut self, store: &mut TaskStore, status: TaskStatus) -> bool {
        let changed = match self.selected_task(store) {
            Some(index) => store.set_status(index, status),
            None => false,
        };
        // Under a status filter the task may have just left the view
        self.clamp(store);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_of(items: &[(&str, TaskStatus)]) -> TaskStore {
        items
            .iter()
            .map(|(name, status)| Task {
                name: name.to_string(),
                status: *status,
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn row_names(view: &ViewState, store: &TaskStore) -> Vec<String> {
        view.rows(store)
            .into_iter()
            .map(|i| store.get(i).unwrap().name.clone())
            .collect()
    }

    fn mixed() -> TaskStore {
        store_of(&[
            ("a", TaskStatus::Todo),
            ("b", TaskStatus::Done),
            ("c", TaskStatus::Todo),
            ("d", TaskStatus::Done),
        ])
    }

    #[test]
    fn filters_keep_store_order() {
        let store = mixed();
        let mut view = ViewState::default();
        assert_eq!(row_names(&view, &store), vec!["a", "b", "c", "d"]);
        view.show_only(TaskStatus::Done);
        assert_eq!(row_names(&view, &store), vec!["b", "d"]);
        view.show_only(TaskStatus::Todo);
        assert_eq!(row_names(&view, &store), vec!["a", "c"]);
    }

    #[test]
    fn filter_is_idempotent() {
        let store = mixed();
        let mut view = ViewState::default();
        view.show_only(TaskStatus::Done);
        let once = view.rows(&store);
        view.show_only(TaskStatus::Done);
        assert_eq!(view.rows(&store), once);
    }

    #[test]
    fn show_all_restores_snapshot() {
        let store = mixed();
        let mut view = ViewState::default();
        view.show_only(TaskStatus::Todo);
        view.show_all();
        let restored: Vec<&Task> = view
            .rows(&store)
            .into_iter()
            .map(|i| store.get(i).unwrap())
            .collect();
        let snapshot: Vec<&Task> = store.snapshot().iter().collect();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn filter_change_resets_selection() {
        let store = mixed();
        let mut view = ViewState::default();
        view.move_down(&store);
        view.move_down(&store);
        view.move_down(&store);
        assert_eq!(view.selected(), 4);
        view.show_only(TaskStatus::Done);
        assert_eq!(view.selected(), 1);
        assert_eq!(view.selected_task(&store), Some(TaskIndex(1)));
    }

    #[test]
    fn movement_is_clamped() {
        let store = mixed();
        let mut view = ViewState::default();
        view.move_up();
        assert_eq!(view.selected(), 1);
        for _ in 0..10 {
            view.move_down(&store);
        }
        assert_eq!(view.selected(), 4);
    }

    #[test]
    fn movement_on_empty_view_stays_at_one() {
        let store = TaskStore::new();
        let mut view = ViewState::default();
        view.move_down(&store);
        view.move_up();
        assert_eq!(view.selected(), 1);
        assert_eq!(view.selected_task(&store), None);
    }

    #[test]
    fn selected_row_translates_to_store_index() {
        let store = mixed();
        let mut view = ViewState::default();
        view.show_only(TaskStatus::Todo);
        view.move_down(&store);
        assert_eq!(view.selected_task(&store), Some(TaskIndex(2)));
    }

    #[test]
    fn delete_under_filter_keeps_hidden_tasks() {
        let mut store = mixed();
        let mut view = ViewState::default();
        view.show_only(TaskStatus::Done);
        view.move_down(&store);
        let removed = view.delete_selected(&mut store).unwrap();
        assert_eq!(removed.name, "d");
        view.show_all();
        assert_eq!(row_names(&view, &store), vec!["a", "b", "c"]);
    }

    #[test]
    fn delete_steps_pointer_back() {
        let mut store = mixed();
        let mut view = ViewState::default();
        view.move_down(&store);
        view.move_down(&store);
        view.delete_selected(&mut store);
        assert_eq!(view.selected(), 2);
        assert_eq!(row_names(&view, &store), vec!["a", "b", "d"]);
    }

    #[test]
    fn delete_first_row_keeps_pointer_at_one() {
        let mut store = mixed();
        let mut view = ViewState::default();
        view.delete_selected(&mut store);
        assert_eq!(view.selected(), 1);
        assert_eq!(row_names(&view, &store), vec!["b", "c", "d"]);
    }

    #[test]
    fn delete_last_remaining_row() {
        let mut store = store_of(&[("only", TaskStatus::Todo)]);
        let mut view = ViewState::default();
        assert!(view.delete_selected(&mut store).is_some());
        assert_eq!(view.selected(), 1);
        assert!(store.is_empty());
        assert!(view.delete_selected(&mut store).is_none());
        assert_eq!(view.selected(), 1);
    }

    #[test]
    fn marking_out_of_filter_clamps_pointer() {
        let mut store = mixed();
        let mut view = ViewState::default();
        view.show_only(TaskStatus::Todo);
        view.move_down(&store);
        assert!(view.set_selected_status(&mut store, TaskStatus::Done));
        assert_eq!(row_names(&view, &store), vec!["a"]);
        assert_eq!(view.selected(), 1);
        assert!(store.get(TaskIndex(2)).unwrap().is_done());
    }

    #[test]
    fn marking_empty_view_is_noop() {
        let mut store = store_of(&[("a", TaskStatus::Todo)]);
        let mut view = ViewState::default();
        view.show_only(TaskStatus::Done);
        assert!(!view.set_selected_status(&mut store, TaskStatus::Done));
        assert_eq!(store.get(TaskIndex(0)).unwrap().status, TaskStatus::Todo);
    }

    #[test]
    fn pointer_stays_in_bounds_over_mixed_operations() {
        let mut store = mixed();
        let mut view = ViewState::default();
        let ops = "ddjjxkjxjjxkxxjx";
        for op in ops.chars() {
            match op {
                'j' => view.move_down(&store),
                'k' => view.move_up(),
                'x' => {
                    view.delete_selected(&mut store);
                }
                _ => {}
            }
            let rows = view.rows(&store).len();
            assert!(view.selected() >= 1);
            assert!(view.selected() <= rows.max(1));
            if op == 'd' {
                store.add("more");
                store.add("and more");
            }
        }
    }
}
