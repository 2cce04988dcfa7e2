//! `gh issue create` command composition.

/// Escape a value for use inside a double-quoted POSIX shell string.
///
/// Backslash, double quote, back-tick and dollar keep their special meaning
/// inside double quotes, so each is prefixed with a backslash.
pub fn escape_double_quoted(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '"' | '`' | '$') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// A single `gh issue create` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCommand {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
}

impl IssueCommand {
    /// Render as one shell command line.
    pub fn to_shell(&self) -> String {
        format!(
            "gh issue create --title \"{}\" --body \"{}\" --label \"{}\" --assignee \"{}\"",
            escape_double_quoted(&self.title),
            escape_double_quoted(&self.body),
            escape_double_quoted(&self.labels.join(",")),
            escape_double_quoted(&self.assignees.join(",")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_untouched() {
        assert_eq!(escape_double_quoted("Setup repo: step 1"), "Setup repo: step 1");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_double_quoted(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_double_quoted("run `npm i`"), r"run \`npm i\`");
        assert_eq!(escape_double_quoted("$HOME"), r"\$HOME");
        assert_eq!(escape_double_quoted(r"C:\temp"), r"C:\\temp");
    }

    #[test]
    fn test_escape_keeps_newlines() {
        assert_eq!(escape_double_quoted("a\nb"), "a\nb");
    }

    #[test]
    fn test_to_shell() {
        let cmd = IssueCommand {
            title: "T001: Setup repo".to_string(),
            body: "### Task Description\nuse `cargo`\n".to_string(),
            labels: vec!["type:task".into(), "priority:p0".into()],
            assignees: vec!["alice".into(), "bob".into()],
        };

        assert_eq!(
            cmd.to_shell(),
            "gh issue create --title \"T001: Setup repo\" \
             --body \"### Task Description\nuse \\`cargo\\`\n\" \
             --label \"type:task,priority:p0\" --assignee \"alice,bob\""
        );
    }
}
