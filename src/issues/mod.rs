//! Issue generation.
//!
//! Turns parsed tasks into `gh issue create` commands:
//!
//! - `labels` - type, priority, scope and size labels
//! - `body` - markdown issue body
//! - `command` - shell command composition and escaping
//! - `emitter` - bounded, ordered output of the whole listing

mod body;
mod command;
mod emitter;
mod labels;

pub use body::BodyTemplate;
pub use command::{escape_double_quoted, IssueCommand};
pub use emitter::{EmitSummary, IssueGenerator};
pub use labels::{labels_for, Priority, Scope, Size, DEFAULT_TYPE_LABEL};
