//! Ephemeral log event payload.

use super::metadata::Metadata;
use super::severity::Severity;

/// A single log event handed from the logging facade to the emitter.
///
/// Events are ephemeral: the facade constructs one per call, the emitter
/// renders it immediately, and nothing is retained. All string data is
/// borrowed from the call site for that reason.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    /// Severity of the event.
    pub severity: Severity,
    /// The rendered log message.
    pub message: &'a str,
    /// Per-call metadata, merged over the emitter's persistent metadata.
    pub metadata: Option<&'a Metadata>,
    /// Source file of the call site.
    pub file: &'a str,
    /// Function (or facade target) of the call site.
    pub function: &'a str,
    /// Source line of the call site.
    pub line: u32,
}

impl<'a> LogEvent<'a> {
    /// Create an event with no per-call metadata.
    #[must_use]
    pub const fn new(
        severity: Severity,
        message: &'a str,
        file: &'a str,
        function: &'a str,
        line: u32,
    ) -> Self {
        Self {
            severity,
            message,
            metadata: None,
            file,
            function,
            line,
        }
    }

    /// Attach per-call metadata to the event.
    #[must_use]
    pub const fn with_metadata(mut self, metadata: &'a Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
