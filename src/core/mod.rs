//! Core types shared by the parser, the generator and the CLI.

mod config;

pub use config::{
    Config, IssuesConfig, SourceConfig, DEFAULT_MAX_ISSUES, DEFAULT_TASKS_FILE, LOCAL_CONFIG_FILE,
};
