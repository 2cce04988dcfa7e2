//! issuegen - GitHub issue commands from a markdown task list.
//!
//! Reads `tasks.md`, and prints one `gh issue create` command per task so the
//! output can be reviewed or piped straight into a shell.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use issuegen::{load_tasks, BodyTemplate, Config, IssueGenerator, TaskRecord};

/// Generate GitHub issue commands from a markdown task list
#[derive(Parser)]
#[command(name = "issuegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Task list to read (overrides the configured path)
    #[arg(short = 'f', long, global = true)]
    tasks_file: Option<PathBuf>,

    /// Maximum number of issue commands to generate
    #[arg(short = 'n', long, global = true)]
    max: Option<usize>,

    /// GitHub login to assign (repeatable, overrides the configured assignees)
    #[arg(short, long = "assignee", global = true)]
    assignees: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print gh issue create commands (default)
    Generate,

    /// List parsed tasks with their labels
    List {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show configuration
    Config {
        /// Show config directory path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the generated commands
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match &cli.command {
        None | Some(Commands::Generate) => {
            let config = resolve_config(&cli)?;
            cmd_generate(&config)?;
        }
        Some(Commands::List { format }) => {
            let config = resolve_config(&cli)?;
            cmd_list(&config, format)?;
        }
        Some(Commands::Config { path }) => {
            cmd_config(&cli, *path)?;
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(*shell);
        }
    }

    Ok(())
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load()?;

    if let Some(path) = &cli.tasks_file {
        config.source.tasks_file = path.to_string_lossy().into_owned();
    }
    if let Some(max) = cli.max {
        config.issues.max_issues = max;
    }
    if !cli.assignees.is_empty() {
        config.issues.assignees.clone_from(&cli.assignees);
    }

    debug!(?config, "resolved configuration");
    Ok(config)
}

/// Print the issue creation commands.
fn cmd_generate(config: &Config) -> Result<()> {
    let path = config.tasks_path();
    let tasks = load_tasks(&path)?;
    let template = BodyTemplate::for_source(&config.source.tasks_file);
    let generator = IssueGenerator::new(template, &config.issues)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = generator.emit(&tasks, &mut out).context("Failed to write commands")?;

    debug!(?summary, "generation finished");
    Ok(())
}

/// A task together with the labels its issue would get.
#[derive(Serialize)]
struct ListedTask<'a> {
    #[serde(flatten)]
    task: &'a TaskRecord,
    labels: Vec<String>,
}

/// List parsed tasks.
fn cmd_list(config: &Config, format: &str) -> Result<()> {
    let path = config.tasks_path();
    let tasks = load_tasks(&path)?;
    let template = BodyTemplate::for_source(&config.source.tasks_file);
    let generator = IssueGenerator::new(template, &config.issues)?;

    let listed: Vec<_> =
        tasks.iter().map(|task| ListedTask { task, labels: generator.labels(task) }).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&listed)?;
            writeln!(out, "{json}")?;
        }
        "text" => {
            for item in &listed {
                let marker = if item.task.parallelizable { "[P] " } else { "" };
                writeln!(
                    out,
                    "{} {}{} ({})",
                    item.task.id,
                    marker,
                    item.task.title,
                    item.labels.join(", ")
                )?;
            }
            writeln!(out, "\nTotal: {} tasks", listed.len())?;
        }
        other => anyhow::bail!("Unsupported format: {other}. Supported: text, json"),
    }

    Ok(())
}

/// Show configuration.
fn cmd_config(cli: &Cli, show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::config_dir() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let config = resolve_config(cli)?;
    let toml = toml::to_string_pretty(&config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, issuegen::APP_NAME, &mut io::stdout());
}
