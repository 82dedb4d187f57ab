//! Integration tests driving the layer through the `tracing` macros.

use std::sync::Arc;

use actionlog_core::{CommandEmitter, MemorySink, Severity};
use actionlog_tracing::ActionsLayer;
use tracing_subscriber::layer::SubscriberExt;

fn capture(level: Severity) -> (Arc<MemorySink>, impl tracing::Subscriber + Send + Sync) {
    let sink = Arc::new(MemorySink::new());
    let emitter = CommandEmitter::new(sink.clone()).with_level(level);
    let subscriber = tracing_subscriber::registry().with(ActionsLayer::new(emitter));
    (sink, subscriber)
}

#[test]
fn test_event_renders_one_line() {
    let (sink, subscriber) = capture(Severity::Trace);
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("starting");
    });
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("::debug "), "got {}", lines[0]);
    assert!(lines[0].ends_with("::starting"), "got {}", lines[0]);
}

#[test]
fn test_fields_become_params() {
    let (sink, subscriber) = capture(Severity::Trace);
    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(job = "build", attempt = 2, "retrying");
    });
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with("::warning "), "got {line}");
    assert!(line.ends_with("::retrying"), "got {line}");
    // &str fields are recorded verbatim, numbers through Debug
    assert!(line.contains("job=build"), "got {line}");
    assert!(line.contains("attempt=2"), "got {line}");
}

#[test]
fn test_call_site_params_present() {
    let (sink, subscriber) = capture(Severity::Trace);
    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("boom");
    });
    let line = sink.lines().remove(0);
    assert!(line.starts_with("::error "), "got {line}");
    assert!(line.contains("file="), "got {line}");
    assert!(line.contains("line="), "got {line}");
}

#[test]
fn test_message_interpolation() {
    let (sink, subscriber) = capture(Severity::Trace);
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("finished {} of {}", 3, 5);
    });
    assert!(sink.lines()[0].ends_with("::finished 3 of 5"));
}

#[test]
fn test_events_below_threshold_emit_nothing() {
    let (sink, subscriber) = capture(Severity::Warning);
    tracing::subscriber::with_default(subscriber, || {
        tracing::trace!("quiet");
        tracing::debug!("quiet");
        tracing::info!("quiet");
    });
    assert!(sink.lines().is_empty());
}

#[test]
fn test_threshold_lets_qualifying_events_through() {
    let (sink, subscriber) = capture(Severity::Warning);
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("quiet");
        tracing::warn!("loud");
    });
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("::warning "));
}
