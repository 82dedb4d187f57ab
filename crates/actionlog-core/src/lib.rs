//! Workflow-command log sink core.
//!
//! `actionlog-core` renders structured log events as workflow command lines
//! (`::command key=value,key=value::body`) on an injected output sink. This
//! is the line-oriented protocol a CI runner parses out of a job's standard
//! output to drive its UI. It also exposes the one-shot protocol commands
//! (masking, environment/output export, path prepension, state saving) and
//! the paired-marker scopes (`stop-commands` suppression and log grouping)
//! as directly callable operations.
//!
//! The crate has three layers:
//!
//! - `domain` - severity scale, metadata values, events, command lines
//! - `ports` - the output-sink abstraction and its stdout/in-memory impls
//! - `services` - the [`CommandEmitter`] tying them together
//!
//! Facade integration (mapping a logging framework's events onto
//! [`LogEvent`]s) lives in adapter crates such as `actionlog-tracing`.

#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    CommandName, LogEvent, Metadata, MetadataValue, ParseSeverityError, Severity,
    SuppressionToken, WorkflowCommand,
};
pub use ports::{CommandSink, MemorySink, StdoutSink};
pub use services::{CommandEmitter, DEFAULT_LEVEL, LEVEL_ENV_VAR};
