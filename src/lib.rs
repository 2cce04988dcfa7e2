//! # issuegen
//!
//! Turn a markdown task list into ready-to-run GitHub CLI issue commands.
//!
//! issuegen reads a `tasks.md` file where every task starts on a line like
//! `T004 [P] Write unit tests`, derives labels and an issue body for each
//! task, and prints one `gh issue create` command per task.
//!
//! ## Quick Start
//!
//! ```bash
//! # Inspect the commands
//! issuegen
//!
//! # Or create the issues right away
//! issuegen | bash
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::format_push_string)]

pub mod core;
pub mod error;
pub mod issues;
pub mod tasks;

// Re-export commonly used types
pub use crate::core::Config;
pub use error::{IssuegenError, IssuegenResult};
pub use issues::{BodyTemplate, EmitSummary, IssueCommand, IssueGenerator};
pub use tasks::{load_tasks, parse_tasks, TaskId, TaskRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "issuegen";
