use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::model::task::Task;

/// Task list file, relative to the working directory
pub const STORE_FILE: &str = "todo.csv";

const CSV_HEADER: [&str; 2] = ["task", "status"];

/// Error type for task file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read tasks: {0}")]
    Read(csv::Error),
    #[error("could not write tasks: {0}")]
    Write(csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A row that could not be turned into a task and was left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line in the file, when known
    pub line: Option<u64>,
    pub reason: String,
}

/// Result of reading the task file
#[derive(Debug, Default)]
pub struct LoadedTasks {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedRow>,
}

/// The open task file. The handle is held for the whole session and
/// closed when this is dropped.
#[derive(Debug)]
pub struct TaskFile {
    path: PathBuf,
    file: File,
}

impl TaskFile {
    /// Open `path` for reading and writing, creating it if absent
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| StoreError::Open {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(TaskFile {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every task from the start of the file
    pub fn load(&mut self) -> Result<LoadedTasks, StoreError> {
        self.file.seek(SeekFrom::Start(0))?;
        read_tasks(&mut self.file)
    }

    /// Replace the file contents with `tasks`
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        write_tasks(&mut self.file, tasks)?;
        self.file.flush()?;
        Ok(())
    }
}

/// Parse tasks from CSV. Rows that don't fit the `task,status` shape are
/// skipped and reported; an empty input is zero tasks.
pub fn read_tasks<R: Read>(reader: R) -> Result<LoadedTasks, StoreError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut loaded = LoadedTasks::default();
    for result in rdr.deserialize::<Task>() {
        match result {
            Ok(task) => loaded.tasks.push(task),
            Err(e) => match e.kind() {
                csv::ErrorKind::Deserialize { .. }
                | csv::ErrorKind::UnequalLengths { .. }
                | csv::ErrorKind::Utf8 { .. } => {
                    loaded.skipped.push(SkippedRow {
                        line: e.position().map(|p| p.line()),
                        reason: e.to_string(),
                    });
                }
                _ => return Err(StoreError::Read(e)),
            },
        }
    }
    Ok(loaded)
}

/// Write the header and one record per task
pub fn write_tasks<W: Write>(writer: W, tasks: &[Task]) -> Result<(), StoreError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADER).map_err(StoreError::Write)?;
    for task in tasks {
        wtr.serialize(task).map_err(StoreError::Write)?;
    }
    wtr.flush()?;
    Ok(())
}
