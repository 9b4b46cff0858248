use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store_io::{STORE_FILE, StoreError, TaskFile};
use crate::model::Config;
use crate::model::store::{TaskIndex, TaskStore};
use crate::ops::view::ViewState;

use super::event::{AppEvent, EventSource};
use super::input;
use super::render;
use super::theme::Theme;

/// Current input mode. Text entry owns the buffer being typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Single-key commands act on the task list
    #[default]
    Command,
    /// Free text is captured for a new task
    TextEntry { buffer: String },
}

/// One-line message shown under the table until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state. Owned by the event loop; panels are drawn from
/// it and never hold state of their own.
pub struct App {
    pub store: TaskStore,
    pub view: ViewState,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub status: Option<StatusMessage>,
    file: TaskFile,
}

impl App {
    pub fn new(store: TaskStore, file: TaskFile, theme: Theme) -> Self {
        App {
            store,
            view: ViewState::default(),
            mode: Mode::Command,
            should_quit: false,
            theme,
            status: None,
            file,
        }
    }

    /// Store indices of the rows currently shown
    pub fn rows(&self) -> Vec<TaskIndex> {
        self.view.rows(&self.store)
    }

    /// The text-entry buffer, if text entry is active
    pub fn input_buffer(&self) -> Option<&str> {
        match &self.mode {
            Mode::TextEntry { buffer } => Some(buffer),
            Mode::Command => None,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    pub fn enter_text_entry(&mut self) {
        log::debug!("entering text entry");
        self.mode = Mode::TextEntry {
            buffer: String::new(),
        };
    }

    /// Leave text entry, discarding whatever was typed
    pub fn cancel_text_entry(&mut self) {
        log::debug!("text entry cancelled");
        self.mode = Mode::Command;
    }

    /// Leave text entry, adding the typed text as a new task unless it is
    /// blank
    pub fn commit_text_entry(&mut self) {
        let Mode::TextEntry { buffer } = std::mem::take(&mut self.mode) else {
            return;
        };
        match self.store.add(&buffer) {
            Some(index) => log::debug!("added task {} at {}", buffer, index.0),
            None => self.set_status("Empty task discarded"),
        }
        self.view.reset_selection();
    }

    /// Write the whole store to the task file
    pub fn save(&mut self) -> Result<usize, StoreError> {
        self.file.save(self.store.snapshot())?;
        Ok(self.store.len())
    }

    pub fn store_path(&self) -> &Path {
        self.file.path()
    }
}

/// Open and load the task file, then run the TUI until the user quits
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = TaskFile::open(Path::new(STORE_FILE))?;
    let loaded = file.load()?;
    log::info!(
        "loaded {} tasks from {}",
        loaded.tasks.len(),
        file.path().display()
    );
    for row in &loaded.skipped {
        match row.line {
            Some(line) => log::warn!("skipped line {}: {}", line, row.reason),
            None => log::warn!("skipped row: {}", row.reason),
        }
    }

    let mut store = TaskStore::new();
    store.load(loaded.tasks);
    let mut app = App::new(store, file, Theme::from_config(&config.ui));
    if !loaded.skipped.is_empty() {
        app.set_error(format!(
            "Skipped {} malformed row(s) in {}",
            loaded.skipped.len(),
            STORE_FILE
        ));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut events = EventSource::new(Duration::from_millis(config.ui.tick_ms.max(1)));
    let result = run_event_loop(&mut terminal, &mut app, &mut events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("exiting");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventSource,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match events.next_event()? {
            AppEvent::Key(key) => input::handle_key(app, key),
            AppEvent::Tick => {
                terminal.draw(|frame| render::render(frame, app))?;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
