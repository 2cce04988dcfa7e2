//! Configuration management for issuegen.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IssuegenError, IssuegenResult};
use crate::issues::DEFAULT_TYPE_LABEL;

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".issuegen.toml";

/// Default location of the task list, relative to the working directory.
pub const DEFAULT_TASKS_FILE: &str = "specs/001-i-am-building/tasks.md";

/// Default cap on generated commands.
pub const DEFAULT_MAX_ISSUES: usize = 20;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the task list lives
    pub source: SourceConfig,

    /// How issues are generated
    pub issues: IssuesConfig,
}

/// Task list location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the task list (`~` is expanded)
    pub tasks_file: String,
}

/// Issue generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuesConfig {
    /// Maximum number of commands to generate
    pub max_issues: usize,

    /// GitHub logins assigned to every issue
    pub assignees: Vec<String>,

    /// Label applied to every issue
    pub type_label: String,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.issuegen.toml` in current directory
    /// 2. `~/.config/issuegen/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> IssuegenResult<Self> {
        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(global_config) = Self::config_dir().map(|d| d.join("config.toml")) {
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> IssuegenResult<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)
            .map_err(|source| IssuegenError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|e| IssuegenError::Config(format!("{}: {e}", path.display())))
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("issuegen"))
    }

    /// The task list path with `~` expanded.
    pub fn tasks_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.source.tasks_file).into_owned())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { tasks_file: DEFAULT_TASKS_FILE.to_string() }
    }
}

impl Default for IssuesConfig {
    fn default() -> Self {
        Self {
            max_issues: DEFAULT_MAX_ISSUES,
            assignees: vec!["TeplrGuy".to_string(), "kwkraus".to_string()],
            type_label: DEFAULT_TYPE_LABEL.to_string(),
        }
    }
}
