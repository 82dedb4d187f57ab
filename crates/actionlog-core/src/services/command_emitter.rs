//! The workflow-command emitter.
//!
//! One emitter owns a severity threshold, a persistent metadata mapping,
//! and a reference to exactly one output sink fixed at construction. It
//! renders log events and one-shot protocol commands as single lines and
//! brackets suppression/grouping scopes with paired marker lines.

use std::fmt;
use std::sync::Arc;

use crate::domain::{
    CommandName, LogEvent, Metadata, MetadataValue, Severity, SuppressionToken, WorkflowCommand,
};
use crate::ports::CommandSink;

/// Environment variable consulted by [`CommandEmitter::from_env`].
pub const LEVEL_ENV_VAR: &str = "ACTIONLOG_LEVEL";

/// Default minimum severity for new emitters.
pub const DEFAULT_LEVEL: Severity = Severity::Info;

/// Renders log events and protocol commands as workflow command lines.
///
/// Cloning an emitter deep-copies its persistent metadata (clones never
/// share mutable state) while every clone keeps writing to the one sink
/// fixed at construction. Rendering never fails: malformed metadata simply
/// stringifies through its own `Display`, and each finished line reaches
/// the sink as one indivisible append.
#[derive(Clone)]
pub struct CommandEmitter {
    level: Severity,
    metadata: Metadata,
    sink: Arc<dyn CommandSink>,
}

impl CommandEmitter {
    /// Create an emitter over `sink` with the default threshold and no
    /// persistent metadata.
    #[must_use]
    pub fn new(sink: Arc<dyn CommandSink>) -> Self {
        Self {
            level: DEFAULT_LEVEL,
            metadata: Metadata::new(),
            sink,
        }
    }

    /// Create an emitter whose threshold comes from the `ACTIONLOG_LEVEL`
    /// environment variable.
    ///
    /// Unset or unparseable values fall back to [`DEFAULT_LEVEL`].
    #[must_use]
    pub fn from_env(sink: Arc<dyn CommandSink>) -> Self {
        let raw = std::env::var(LEVEL_ENV_VAR).ok();
        Self::new(sink).with_level(parse_level(raw.as_deref()))
    }

    /// Set the threshold, builder style.
    #[must_use]
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Current minimum severity threshold.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// Change the minimum severity threshold.
    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Whether events at `severity` pass the threshold.
    ///
    /// The facade consults this before constructing an event; events below
    /// the threshold never reach [`CommandEmitter::emit`].
    #[must_use]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    /// Look up one persistent metadata entry.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Set or clear one persistent metadata entry (`None` clears).
    pub fn set_metadata(&mut self, key: impl Into<String>, value: Option<MetadataValue>) {
        let key = key.into();
        match value {
            Some(value) => {
                self.metadata.insert(key, value);
            }
            None => {
                self.metadata.remove(&key);
            }
        }
    }

    /// Render one log event as exactly one annotation line on the sink.
    ///
    /// The parameter set starts from the persistent metadata, overlays the
    /// event's per-call metadata (per-call wins on key collision), then
    /// forces `file` and `line` to the event's call site.
    pub fn emit(&self, event: &LogEvent<'_>) {
        let mut params = self.metadata.clone();
        if let Some(extra) = event.metadata {
            for (key, value) in extra {
                params.insert(key.clone(), value.clone());
            }
        }
        params.insert("file".to_string(), MetadataValue::from(event.file));
        params.insert(
            "line".to_string(),
            MetadataValue::String(event.line.to_string()),
        );

        let mut command = WorkflowCommand::with_body(
            CommandName::Named(event.severity.command_name()),
            event.message,
        );
        for (key, value) in &params {
            command = command.param(key.clone(), value.to_string());
        }
        self.write(&command);
    }

    /// Instruct the runner to redact `value` wherever it appears in
    /// subsequent output.
    pub fn mask(&self, value: &str) {
        self.write(&WorkflowCommand::with_body(
            CommandName::Named("add-mask"),
            value,
        ));
    }

    /// Export an environment variable to subsequent job steps.
    pub fn set_env(&self, name: &str, value: &str) {
        self.write(
            &WorkflowCommand::with_body(CommandName::Named("set-env"), value).param("name", name),
        );
    }

    /// Publish a step output parameter.
    pub fn set_output(&self, name: &str, value: &str) {
        self.write(
            &WorkflowCommand::with_body(CommandName::Named("set-output"), value)
                .param("name", name),
        );
    }

    /// Persist a value for later job steps of the same workflow.
    pub fn save_state(&self, name: &str, value: &str) {
        self.write(
            &WorkflowCommand::with_body(CommandName::Named("save-state"), value)
                .param("name", name),
        );
    }

    /// Prepend a directory to the system path of subsequent job steps.
    pub fn add_path(&self, path: &str) {
        self.write(&WorkflowCommand::with_body(
            CommandName::Named("add-path"),
            path,
        ));
    }

    /// Run `body` with workflow-command interpretation suspended.
    ///
    /// Emits `::stop-commands::{token}` before the body and the matching
    /// `::{token}::` resume marker after it, with a fresh token per call.
    /// Lines the body emits still reach the sink; the runner treats them as
    /// inert text between the markers. The resume marker goes through a
    /// drop guard, so the pair stays balanced even when `body` panics.
    pub fn without_processing_commands<R>(&self, body: impl FnOnce() -> R) -> R {
        let token = SuppressionToken::generate();
        self.write(&WorkflowCommand::with_body(
            CommandName::Named("stop-commands"),
            token.to_string(),
        ));
        let _guard = MarkerGuard {
            emitter: self,
            closing: WorkflowCommand::new(CommandName::Resume(token)),
        };
        body()
    }

    /// Fold the lines emitted by `body` into a collapsible group titled
    /// `title` in the runner UI.
    ///
    /// The `::endgroup::` marker goes through a drop guard like the resume
    /// marker of [`CommandEmitter::without_processing_commands`].
    pub fn group<R>(&self, title: &str, body: impl FnOnce() -> R) -> R {
        self.write(&WorkflowCommand::with_body(
            CommandName::Named("group"),
            title,
        ));
        let _guard = MarkerGuard {
            emitter: self,
            closing: WorkflowCommand::new(CommandName::Named("endgroup")),
        };
        body()
    }

    fn write(&self, command: &WorkflowCommand) {
        self.sink.append_line(&command.render());
    }
}

impl fmt::Debug for CommandEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEmitter")
            .field("level", &self.level)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Emits its closing marker when dropped, pairing it with an
/// already-emitted opening marker even when the guarded body unwinds.
struct MarkerGuard<'a> {
    emitter: &'a CommandEmitter,
    closing: WorkflowCommand,
}

impl Drop for MarkerGuard<'_> {
    fn drop(&mut self) {
        self.emitter.write(&self.closing);
    }
}

fn parse_level(raw: Option<&str>) -> Severity {
    raw.and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        Sink {}

        impl CommandSink for Sink {
            fn append_line(&self, line: &str);
        }
    }

    #[test]
    fn test_mask_is_one_exact_append() {
        let mut sink = MockSink::new();
        sink.expect_append_line()
            .withf(|line: &str| line == "::add-mask::secret")
            .times(1)
            .return_const(());
        CommandEmitter::new(Arc::new(sink)).mask("secret");
    }

    #[test]
    fn test_emit_is_one_indivisible_append() {
        let mut sink = MockSink::new();
        sink.expect_append_line()
            .withf(|line: &str| line.starts_with("::warning ") && line.ends_with("::careful"))
            .times(1)
            .return_const(());
        let emitter = CommandEmitter::new(Arc::new(sink));
        emitter.emit(&LogEvent::new(
            Severity::Warning,
            "careful",
            "job.rs",
            "run",
            7,
        ));
    }

    #[test]
    fn test_parse_level_falls_back_to_default() {
        assert_eq!(parse_level(None), DEFAULT_LEVEL);
        assert_eq!(parse_level(Some("chatty")), DEFAULT_LEVEL);
        assert_eq!(parse_level(Some("warning")), Severity::Warning);
    }

    #[test]
    fn test_set_metadata_none_clears() {
        let emitter_sink = Arc::new(crate::ports::MemorySink::new());
        let mut emitter = CommandEmitter::new(emitter_sink);
        emitter.set_metadata("job", Some(MetadataValue::from("build")));
        assert_eq!(emitter.metadata_value("job").and_then(MetadataValue::as_str), Some("build"));
        emitter.set_metadata("job", None);
        assert!(emitter.metadata_value("job").is_none());
    }
}
