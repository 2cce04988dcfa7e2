//! Label classification for generated issues.
//!
//! Every task gets a type label, a priority derived from its number, an
//! optional scope guessed from the title, and a size estimate.

use crate::tasks::TaskRecord;

/// Default type label applied to every issue.
pub const DEFAULT_TYPE_LABEL: &str = "type:task";

/// Titles shorter than this (in UTF-16 units) containing "add" are sized small.
const SMALL_TITLE_LEN: usize = 50;

/// Priority bucket, from the task number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Setup tasks (1-3)
    P0,
    /// Test tasks (4-7)
    P1,
    /// Implementation tasks (8+)
    P2,
}

impl Priority {
    pub fn from_number(number: u16) -> Self {
        match number {
            0..=3 => Self::P0,
            4..=7 => Self::P1,
            _ => Self::P2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::P0 => "priority:p0",
            Self::P1 => "priority:p1",
            Self::P2 => "priority:p2",
        }
    }
}

/// Area of the codebase a task touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Testing,
    Setup,
    Ui,
    Backend,
    Docs,
    Ci,
}

impl Scope {
    /// Keyword table, checked in order; the first hit wins.
    const KEYWORDS: &'static [(Self, &'static [&'static str])] = &[
        (Self::Testing, &["test"]),
        (Self::Setup, &["setup", "config"]),
        (Self::Ui, &["ui", "page", "component"]),
        (Self::Backend, &["model", "service"]),
        (Self::Docs, &["doc"]),
        (Self::Ci, &["ci"]),
    ];

    /// Guess the scope from a task title (case-insensitive substring match).
    pub fn from_title(title: &str) -> Option<Self> {
        let lower = title.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(scope, _)| *scope)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Testing => "scope:testing",
            Self::Setup => "scope:setup",
            Self::Ui => "scope:ui",
            Self::Backend => "scope:backend",
            Self::Docs => "scope:docs",
            Self::Ci => "scope:ci",
        }
    }
}

/// Rough size estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    S,
    M,
    L,
}

impl Size {
    pub fn estimate(number: u16, title: &str) -> Self {
        let lower = title.to_lowercase();
        let short = title.encode_utf16().count() < SMALL_TITLE_LEN;
        if number <= 3 || (lower.contains("add") && short) {
            Self::S
        } else if lower.contains("implement") {
            Self::L
        } else {
            Self::M
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::S => "size:S",
            Self::M => "size:M",
            Self::L => "size:L",
        }
    }
}

/// Compute the labels for a task, in order: type, priority, scope (if any), size.
pub fn labels_for(task: &TaskRecord, type_label: &str) -> Vec<String> {
    let number = task.id.number();

    let mut labels = Vec::with_capacity(4);
    labels.push(type_label.to_string());
    labels.push(Priority::from_number(number).label().to_string());
    if let Some(scope) = Scope::from_title(&task.title) {
        labels.push(scope.label().to_string());
    }
    labels.push(Size::estimate(number, &task.title).label().to_string());
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskId;

    fn task(id: &str, title: &str) -> TaskRecord {
        TaskRecord::new(TaskId::parse(id).unwrap(), title, false)
    }

    #[test]
    fn test_priority_buckets() {
        assert_eq!(Priority::from_number(0), Priority::P0);
        assert_eq!(Priority::from_number(3), Priority::P0);
        assert_eq!(Priority::from_number(4), Priority::P1);
        assert_eq!(Priority::from_number(7), Priority::P1);
        assert_eq!(Priority::from_number(8), Priority::P2);
        assert_eq!(Priority::from_number(120), Priority::P2);
    }

    #[test]
    fn test_scope_first_match_wins() {
        // "test" beats "config"
        assert_eq!(Scope::from_title("Test config loader"), Some(Scope::Testing));
        assert_eq!(Scope::from_title("Configure linting"), Some(Scope::Setup));
        assert_eq!(Scope::from_title("Product PAGE layout"), Some(Scope::Ui));
        assert_eq!(Scope::from_title("Cart service"), Some(Scope::Backend));
        assert_eq!(Scope::from_title("Write README docs"), Some(Scope::Docs));
        assert_eq!(Scope::from_title("Wire CI pipeline"), Some(Scope::Ci));
        assert_eq!(Scope::from_title("Refactor"), None);
    }

    #[test]
    fn test_scope_substring_matches() {
        // "build" contains "ui"
        assert_eq!(Scope::from_title("Build checkout"), Some(Scope::Ui));
        // "decimal" contains "ci"
        assert_eq!(Scope::from_title("Decimal prices"), Some(Scope::Ci));
    }

    #[test]
    fn test_size_estimates() {
        assert_eq!(Size::estimate(2, "Implement everything"), Size::S);
        assert_eq!(Size::estimate(9, "Add cart"), Size::S);
        assert_eq!(Size::estimate(9, "Implement cart"), Size::L);
        assert_eq!(Size::estimate(9, "Refactor cart"), Size::M);

        let long = "Add a very long title that goes well past the fifty character limit";
        assert_eq!(Size::estimate(9, long), Size::M);

        let long_impl = "Add and implement a long title that goes well past fifty characters";
        assert_eq!(Size::estimate(9, long_impl), Size::L);
    }

    #[test]
    fn test_size_counts_utf16_units() {
        // 28 chars but 52 UTF-16 units
        let title = format!("Add {}", "🚲".repeat(24));
        assert_eq!(Size::estimate(9, &title), Size::M);

        let title = format!("Add {}", "é".repeat(24));
        assert_eq!(Size::estimate(9, &title), Size::S);
    }

    #[test]
    fn test_labels_order() {
        let labels = labels_for(&task("T004", "Write unit tests"), DEFAULT_TYPE_LABEL);
        assert_eq!(labels, vec!["type:task", "priority:p1", "scope:testing", "size:M"]);
    }

    #[test]
    fn test_labels_without_scope() {
        let labels = labels_for(&task("T010", "Refactor checkout flow"), DEFAULT_TYPE_LABEL);
        assert_eq!(labels, vec!["type:task", "priority:p2", "size:M"]);
    }

    #[test]
    fn test_setup_task_labels() {
        let labels = labels_for(&task("T001", "Setup repo skeleton"), DEFAULT_TYPE_LABEL);
        assert_eq!(labels, vec!["type:task", "priority:p0", "scope:setup", "size:S"]);
    }

    #[test]
    fn test_custom_type_label() {
        let labels = labels_for(&task("T009", "Implement cart model"), "kind:chore");
        assert_eq!(labels, vec!["kind:chore", "priority:p2", "scope:backend", "size:L"]);
    }

    #[test]
    fn test_labels_shape_is_total() {
        for (id, title) in [("T000", ""), ("T005", "Add docs"), ("T999", "ui ci test")] {
            let labels = labels_for(&task(id, title), DEFAULT_TYPE_LABEL);
            assert_eq!(labels[0], "type:task");
            assert!(labels[1].starts_with("priority:"));
            assert!(labels.last().unwrap().starts_with("size:"));
            assert_eq!(labels.iter().filter(|l| l.starts_with("scope:")).count(), labels.len() - 3);
        }
    }
}
