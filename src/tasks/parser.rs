//! Task list parser.
//!
//! Scans a `tasks.md` document line by line and extracts [`TaskRecord`]s.
//!
//! A task starts at a line such as:
//!
//! ```text
//! T004 [P] Write unit tests
//! ```
//!
//! The lines that follow form its description until the next task line, a
//! `---` rule, or a `Phase A`..`Phase E` heading. After such a boundary the
//! remaining lines are ignored until the next task line. Lines containing
//! `- Acceptance:` become acceptance criteria instead of description text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::record::{TaskId, TaskRecord};

/// `T001 [P] Title` with the parallel marker optional.
static TASK_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(T[0-9]{3})\s+(\[P\]\s+)?(.+)$").expect("task line pattern is valid")
});

/// Lines that end the description of the current task.
static BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:T[0-9]{3}|---|Phase [A-E])").expect("boundary pattern is valid")
});

/// Marker introducing an acceptance criterion.
pub const ACCEPTANCE_MARKER: &str = "- Acceptance:";

/// How a non-task line is treated while a description is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    /// Stops description collection for the current task.
    Boundary,
    /// An acceptance criterion with the text after the marker, trimmed.
    Acceptance(&'a str),
    /// Non-blank description text.
    Content,
    /// Whitespace only.
    Blank,
}

fn classify(line: &str) -> LineKind<'_> {
    if BOUNDARY.is_match(line) {
        return LineKind::Boundary;
    }

    // The last marker wins when a line repeats it.
    if let Some(idx) = line.rfind(ACCEPTANCE_MARKER) {
        return LineKind::Acceptance(line[idx + ACCEPTANCE_MARKER.len()..].trim());
    }

    if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Content
    }
}

/// Parse a task line into a fresh record.
fn parse_task_line(line: &str) -> Option<TaskRecord> {
    let caps = TASK_LINE.captures(line)?;
    let id = TaskId::parse(caps.get(1)?.as_str())?;
    let parallel = caps.get(2).is_some();
    let title = caps.get(3)?.as_str().trim();
    Some(TaskRecord::new(id, title, parallel))
}

/// Scanner state.
#[derive(Debug)]
enum ScanState<'a> {
    /// No task line seen yet.
    Idle,

    /// A task is open.
    Collecting {
        task: TaskRecord,
        lines: Vec<&'a str>,
        /// Cleared by a boundary line, set again by the next task line.
        accumulating: bool,
    },
}

impl<'a> ScanState<'a> {
    /// Advance by one line, pushing any task that the line closes onto `done`.
    fn step(self, line: &'a str, done: &mut Vec<TaskRecord>) -> Self {
        if let Some(task) = parse_task_line(line) {
            if let Some(previous) = self.finish() {
                done.push(previous);
            }
            trace!(id = %task.id, parallel = task.parallelizable, "task line");
            return Self::Collecting { task, lines: Vec::new(), accumulating: true };
        }

        match self {
            Self::Collecting { mut task, mut lines, accumulating: true } => {
                let accumulating = match classify(line) {
                    LineKind::Boundary => {
                        trace!(id = %task.id, line, "description boundary");
                        false
                    }
                    LineKind::Acceptance(text) => {
                        if !text.is_empty() {
                            task.acceptance_criteria.push(text.to_string());
                        }
                        true
                    }
                    LineKind::Content => {
                        lines.push(line);
                        true
                    }
                    LineKind::Blank => true,
                };
                Self::Collecting { task, lines, accumulating }
            }
            other => other,
        }
    }

    /// Close the open task, if any.
    fn finish(self) -> Option<TaskRecord> {
        match self {
            Self::Idle => None,
            Self::Collecting { mut task, lines, .. } => {
                task.description = lines.join("\n").trim().to_string();
                Some(task)
            }
        }
    }
}

/// Parse every task in `content`, in document order.
///
/// Parsing never fails: lines that do not fit the task list format are either
/// description text or ignored.
pub fn parse_tasks(content: &str) -> Vec<TaskRecord> {
    let (mut tasks, state) =
        content.lines().fold((Vec::new(), ScanState::Idle), |(mut done, state), line| {
            let next = state.step(line, &mut done);
            (done, next)
        });

    if let Some(last) = state.finish() {
        tasks.push(last);
    }

    debug!(count = tasks.len(), "parsed task list");
    tasks
}
