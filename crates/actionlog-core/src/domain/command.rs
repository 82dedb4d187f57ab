//! Workflow command line model.
//!
//! A workflow command is one line of output the runner parses as an
//! instruction: `::name key=value,key=value::body`. The resume marker of a
//! suppression scope uses the scope's token as the command name, so names
//! are modeled as a tagged variant and every line goes through the same
//! rendering path.

use std::fmt;
use uuid::Uuid;

/// Token pairing a `stop-commands` marker with its resume marker.
///
/// Freshly generated per suppression scope and never persisted; the 128-bit
/// random format makes accidental collisions with log text negligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuppressionToken(Uuid);

impl SuppressionToken {
    /// Generate a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SuppressionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name slot of a workflow command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    /// A fixed protocol command such as `debug` or `set-env`.
    Named(&'static str),
    /// The resume marker of a suppression scope; the token is the name.
    Resume(SuppressionToken),
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Resume(token) => write!(f, "{token}"),
        }
    }
}

/// One workflow command before rendering.
#[derive(Debug, Clone)]
pub struct WorkflowCommand {
    name: CommandName,
    params: Vec<(String, String)>,
    body: String,
}

impl WorkflowCommand {
    /// Create a command with no parameters and an empty body.
    #[must_use]
    pub const fn new(name: CommandName) -> Self {
        Self {
            name,
            params: Vec::new(),
            body: String::new(),
        }
    }

    /// Create a command with an empty parameter set and the given body.
    #[must_use]
    pub fn with_body(name: CommandName, body: impl Into<String>) -> Self {
        Self {
            name,
            params: Vec::new(),
            body: body.into(),
        }
    }

    /// Add one `key=value` parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Render the command as exactly one protocol line.
    ///
    /// Parameters sort by their joined `key=value` string, not by key, so
    /// output never depends on mapping iteration order. A command with no
    /// parameters omits the parameter block and its leading space.
    #[must_use]
    pub fn render(&self) -> String {
        let mut pairs: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        pairs.sort();
        if pairs.is_empty() {
            format!("::{}::{}", self.name, self.body)
        } else {
            format!("::{} {}::{}", self.name, pairs.join(","), self.body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_params_omits_space() {
        let line = WorkflowCommand::with_body(CommandName::Named("add-mask"), "secret").render();
        assert_eq!(line, "::add-mask::secret");
    }

    #[test]
    fn test_render_sorts_by_joined_pair() {
        let line = WorkflowCommand::with_body(CommandName::Named("debug"), "msg")
            .param("b", "y")
            .param("a", "x")
            .render();
        assert_eq!(line, "::debug a=x,b=y::msg");
    }

    #[test]
    fn test_sort_key_is_the_joined_string() {
        // "a=z..." sorts after "a=b..." even though the bare keys tie on
        // their shared prefix; the joined form decides.
        let line = WorkflowCommand::with_body(CommandName::Named("debug"), "msg")
            .param("a", "z=q")
            .param("a=b", "c")
            .render();
        assert_eq!(line, "::debug a=b=c,a=z=q::msg");
    }

    #[test]
    fn test_resume_marker_renders_token_as_name() {
        let token = SuppressionToken::generate();
        let line = WorkflowCommand::new(CommandName::Resume(token)).render();
        assert_eq!(line, format!("::{token}::"));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(SuppressionToken::generate(), SuppressionToken::generate());
    }
}
