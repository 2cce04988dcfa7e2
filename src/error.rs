//! Error types for issuegen.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for issuegen operations.
pub type IssuegenResult<T> = Result<T, IssuegenError>;

/// Errors that can occur while loading a task list or generating commands.
#[derive(Debug, Error)]
pub enum IssuegenError {
    /// The task list does not exist.
    #[error("{} not found", .0.display())]
    TasksFileNotFound(PathBuf),

    /// Reading a file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The issue limit must allow at least one command.
    #[error("Invalid issue limit: {0} (must be at least 1)")]
    InvalidLimit(usize),
}

impl IssuegenError {
    /// Whether this error means the input document is absent.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::TasksFileNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = IssuegenError::TasksFileNotFound(PathBuf::from("specs/tasks.md"));
        assert_eq!(err.to_string(), "specs/tasks.md not found");
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_invalid_limit_message() {
        let err = IssuegenError::InvalidLimit(0);
        assert!(err.to_string().contains("at least 1"));
        assert!(!err.is_missing_input());
    }
}
