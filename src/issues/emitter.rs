//! Command emission.
//!
//! Writes the summary header, one `gh issue create` line per task (up to the
//! configured limit), an optional truncation note and the final total.

use std::io::{self, Write};

use tracing::{debug, info};

use super::body::BodyTemplate;
use super::command::IssueCommand;
use super::labels::labels_for;
use crate::core::IssuesConfig;
use crate::error::{IssuegenError, IssuegenResult};
use crate::tasks::TaskRecord;

/// Counts reported after an emission pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    /// Tasks found in the document
    pub found: usize,
    /// Commands written
    pub generated: usize,
    /// Tasks left out because of the limit
    pub omitted: usize,
}

/// Turns task records into issue commands.
#[derive(Debug, Clone)]
pub struct IssueGenerator {
    template: BodyTemplate,
    type_label: String,
    assignees: Vec<String>,
    max_issues: usize,
}

impl IssueGenerator {
    /// Create a generator; `max_issues` must be at least 1.
    pub fn new(template: BodyTemplate, settings: &IssuesConfig) -> IssuegenResult<Self> {
        if settings.max_issues == 0 {
            return Err(IssuegenError::InvalidLimit(settings.max_issues));
        }

        Ok(Self {
            template,
            type_label: settings.type_label.clone(),
            assignees: settings.assignees.clone(),
            max_issues: settings.max_issues,
        })
    }

    /// Labels for a task under this generator's type label.
    pub fn labels(&self, task: &TaskRecord) -> Vec<String> {
        labels_for(task, &self.type_label)
    }

    /// Build the command for a single task.
    pub fn command_for(&self, task: &TaskRecord) -> IssueCommand {
        IssueCommand {
            title: task.issue_title(),
            body: self.template.render(task),
            labels: self.labels(task),
            assignees: self.assignees.clone(),
        }
    }

    /// The tasks that will get a command, in document order.
    pub fn selected<'a>(&self, tasks: &'a [TaskRecord]) -> &'a [TaskRecord] {
        &tasks[..tasks.len().min(self.max_issues)]
    }

    /// Write the full command listing to `out`.
    pub fn emit<W: Write>(&self, tasks: &[TaskRecord], out: &mut W) -> io::Result<EmitSummary> {
        let selected = self.selected(tasks);
        let summary = EmitSummary {
            found: tasks.len(),
            generated: selected.len(),
            omitted: tasks.len() - selected.len(),
        };

        writeln!(out, "# Found {} tasks in {}", summary.found, self.template.source_name)?;
        writeln!(out, "# Generating GitHub CLI commands for the first {} tasks", summary.generated)?;
        writeln!(out)?;
        writeln!(out, "# Run these commands to create issues:")?;
        writeln!(out)?;

        for task in selected {
            debug!(id = %task.id, "emitting issue command");
            writeln!(out, "{}", self.command_for(task).to_shell())?;
            writeln!(out)?;
        }

        if summary.omitted > 0 {
            info!(omitted = summary.omitted, max = self.max_issues, "task list truncated");
            writeln!(
                out,
                "# Note: {} additional tasks not included (max {})",
                summary.omitted, self.max_issues
            )?;
        }

        writeln!(out)?;
        writeln!(out, "# Total: {} issue creation commands generated", summary.generated)?;
        out.flush()?;

        Ok(summary)
    }
}
