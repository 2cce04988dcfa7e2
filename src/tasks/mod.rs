//! Task list loading and parsing.
//!
//! - `record` - the [`TaskRecord`] entity
//! - `parser` - line-oriented `tasks.md` scanner

mod parser;
mod record;

use std::borrow::Cow;
use std::path::Path;

use tracing::{info, warn};

pub use parser::{parse_tasks, ACCEPTANCE_MARKER};
pub use record::{TaskId, TaskRecord};

use crate::error::{IssuegenError, IssuegenResult};

/// Read and parse the task list at `path`.
///
/// A missing file is reported as [`IssuegenError::TasksFileNotFound`] before
/// any read is attempted.
pub fn load_tasks(path: &Path) -> IssuegenResult<Vec<TaskRecord>> {
    if !path.exists() {
        return Err(IssuegenError::TasksFileNotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path)
        .map_err(|source| IssuegenError::Io { path: path.to_path_buf(), source })?;

    // Invalid UTF-8 is replaced, not rejected
    let content = String::from_utf8_lossy(&bytes);
    if matches!(content, Cow::Owned(_)) {
        warn!(path = %path.display(), "task list is not valid UTF-8, replaced invalid bytes");
    }

    let tasks = parse_tasks(&content);
    info!(path = %path.display(), count = tasks.len(), "loaded task list");
    Ok(tasks)
}
