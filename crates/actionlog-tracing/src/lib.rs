//! `tracing` adapter for actionlog.
//!
//! This crate realizes the logging-facade boundary: a
//! `tracing_subscriber::Layer` that maps `tracing` events onto
//! `actionlog-core` log events and renders them as workflow command lines.
//! Call [`init`] to install it over process stdout, or build an
//! [`ActionsLayer`] around your own emitter to compose it with other
//! layers.

#![deny(unsafe_code)]

mod layer;

pub use layer::{ActionsLayer, init, severity_for_level};

// Re-export core types adapter users need at hand
pub use actionlog_core::{CommandEmitter, MemorySink, Severity, StdoutSink};
