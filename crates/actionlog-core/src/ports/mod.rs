//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from its surroundings.
//! They contain no protocol logic and use only domain types.

pub mod command_sink;

// Re-export sink types for convenience
pub use command_sink::{CommandSink, MemorySink, StdoutSink};
