//! Issue body rendering.

use crate::tasks::TaskRecord;

const PARALLEL_YES: &str = "✅ YES - This task can run in parallel with other [P] tasks";
const PARALLEL_NO: &str = "❌ NO - This task has dependencies";

/// Per-run values the body template refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyTemplate {
    /// Repository-relative path of the task list, `/`-separated
    pub source_path: String,

    /// File name of the task list (`tasks.md`)
    pub source_name: String,
}

impl BodyTemplate {
    /// Build the template for the task list as configured (before `~` expansion).
    ///
    /// Backslashes become `/` and a leading `./` is dropped; everything else,
    /// including `..` and a leading `/`, is kept as written.
    pub fn for_source(configured: &str) -> Self {
        let normalized = configured.replace('\\', "/");
        let source_path = normalized.strip_prefix("./").unwrap_or(&normalized).to_string();

        let source_name = source_path
            .rsplit('/')
            .find(|part| !part.is_empty())
            .unwrap_or(source_path.as_str())
            .to_string();

        Self { source_path, source_name }
    }

    /// Render the markdown body for one task.
    pub fn render(&self, task: &TaskRecord) -> String {
        let mut body = format!("### Task Description\n{}\n\n", task.description);

        body.push_str("### Acceptance Criteria\n");
        if task.acceptance_criteria.is_empty() {
            body.push_str(&format!("- [ ] Task completed as specified in {}\n", self.source_name));
        } else {
            for criterion in &task.acceptance_criteria {
                body.push_str(&format!("- [ ] {criterion}\n"));
            }
        }
        body.push('\n');

        body.push_str("### References\n");
        body.push_str(&format!("- [{0}](../blob/main/{0})\n\n", self.source_path));

        body.push_str("### Parallelizable\n");
        body.push_str(if task.parallelizable { PARALLEL_YES } else { PARALLEL_NO });
        body.push('\n');

        body
    }
}
