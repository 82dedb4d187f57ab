//! Output sink port for rendered command lines.
//!
//! This port abstracts the destination stream the runner reads. The real
//! destination is process stdout; tests capture lines in memory.

use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Port for appending finished command lines to an output stream.
///
/// Each call delivers one complete line; the emitter never splits a line
/// across calls, so implementations must not interleave partial lines.
/// Write failures have no error channel here and stay the implementation's
/// concern.
pub trait CommandSink: Send + Sync {
    /// Append one line (without trailing newline) to the sink.
    fn append_line(&self, line: &str);
}

/// Sink writing each line to the process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a new stdout sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CommandSink for StdoutSink {
    fn append_line(&self, line: &str) {
        // One locked writeln per line keeps the line indivisible.
        let _ = writeln!(std::io::stdout().lock(), "{line}");
    }
}

/// In-memory sink that accumulates lines.
///
/// The capture double for tests and for callers that post-process output.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty in-memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines appended so far, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CommandSink for MemorySink {
    fn append_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_sink_accumulates_in_order() {
        let sink = MemorySink::new();
        sink.append_line("first");
        sink.append_line("second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_stdout_sink_is_a_command_sink() {
        let _sink: Arc<dyn CommandSink> = Arc::new(StdoutSink::new());
    }
}
