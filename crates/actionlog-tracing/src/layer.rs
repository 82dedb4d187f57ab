//! The `tracing` facade boundary.
//!
//! [`ActionsLayer`] maps `tracing` events (level, message, fields, call
//! site) onto core log events and hands them to a [`CommandEmitter`]. The
//! severity threshold is enforced here: events below the emitter's level
//! are rejected in `enabled` and never reach the emitter.

use std::fmt;
use std::sync::Arc;

use actionlog_core::domain::Metadata as LogMetadata;
use actionlog_core::{CommandEmitter, LogEvent, MetadataValue, Severity, StdoutSink};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Placeholder file name when the facade has no call-site information.
const UNKNOWN_FILE: &str = "<unknown>";

/// Layer rendering every qualifying `tracing` event as one command line.
#[derive(Debug)]
pub struct ActionsLayer {
    emitter: CommandEmitter,
}

impl ActionsLayer {
    /// Create a layer over an existing emitter.
    #[must_use]
    pub const fn new(emitter: CommandEmitter) -> Self {
        Self { emitter }
    }

    /// Create a layer over process stdout, with the threshold taken from
    /// the `ACTIONLOG_LEVEL` environment variable.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(CommandEmitter::from_env(Arc::new(StdoutSink::new())))
    }

    /// The emitter behind this layer.
    #[must_use]
    pub const fn emitter(&self) -> &CommandEmitter {
        &self.emitter
    }
}

/// Map a `tracing` level onto the core severity scale.
///
/// `tracing` has no notice/critical levels; the core keeps the full
/// seven-level scale for direct users of the emitter.
#[must_use]
pub fn severity_for_level(level: Level) -> Severity {
    match level {
        Level::TRACE => Severity::Trace,
        Level::DEBUG => Severity::Debug,
        Level::INFO => Severity::Info,
        Level::WARN => Severity::Warning,
        // `tracing` exposes levels as constants, so the match needs a
        // catch-all; only ERROR remains.
        _ => Severity::Error,
    }
}

impl<S: Subscriber> Layer<S> for ActionsLayer {
    fn enabled(&self, metadata: &tracing::Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.emitter.enabled(severity_for_level(*metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = severity_for_level(*event.metadata().level());
        if !self.emitter.enabled(severity) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let message = visitor.message.unwrap_or_default();
        let mut log_event = LogEvent::new(
            severity,
            &message,
            metadata.file().unwrap_or(UNKNOWN_FILE),
            metadata.target(),
            metadata.line().unwrap_or(0),
        );
        if !visitor.fields.is_empty() {
            log_event = log_event.with_metadata(&visitor.fields);
        }
        self.emitter.emit(&log_event);
    }
}

/// Collects an event's fields: `message` becomes the body, every other
/// field becomes per-call string metadata.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: LogMetadata,
}

impl FieldVisitor {
    fn record(&mut self, field: &Field, rendered: String) {
        if field.name() == "message" {
            self.message = Some(rendered);
        } else {
            self.fields
                .insert(field.name().to_string(), MetadataValue::String(rendered));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record(field, format!("{value:?}"));
    }
}

/// Install an [`ActionsLayer`] over process stdout as the global default
/// subscriber.
///
/// Panics if a global default subscriber is already installed, matching the
/// behavior of `tracing_subscriber::fmt::init`.
pub fn init() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(ActionsLayer::stdout()).init();
}
