//! Services built on the domain model and ports.

pub mod command_emitter;

// Re-export the emitter for convenience
pub use command_emitter::{CommandEmitter, DEFAULT_LEVEL, LEVEL_ENV_VAR};
