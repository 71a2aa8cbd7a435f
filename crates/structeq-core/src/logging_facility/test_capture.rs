//! Test capture mode for deterministic logging assertions
//!
//! This module provides a test-only subscriber that captures log events
//! in memory for assertion in tests. Events are tagged with the emitting
//! thread so tests running in parallel only see their own events.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::thread::ThreadId;
use tracing::field::Visit;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use structeq_core_types::schema::{
    EVENT_MISMATCH, FIELD_COMPONENT, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_EVENT, FIELD_KIND,
    FIELD_OP, FIELD_REASON,
};

/// A captured log event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub thread: ThreadId,
    pub op: Option<String>,
    pub event: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Look up a field value by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Module path of the emitting code
    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    /// Stable error code of an `end_error` event
    pub fn err_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }

    /// Debug-formatted error kind of an `end_error` event
    pub fn err_kind(&self) -> Option<&str> {
        self.field(FIELD_ERR_KIND)
    }

    /// True for `mismatch` events with the given kind and reason
    pub fn is_mismatch(&self, kind: &str, reason: &str) -> bool {
        self.event.as_deref() == Some(EVENT_MISMATCH)
            && self.field(FIELD_KIND) == Some(kind)
            && self.field(FIELD_REASON) == Some(reason)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Test capture layer for collecting log events
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            thread: std::thread::current().id(),
            op: visitor.fields.get(FIELD_OP).cloned(),
            event: visitor.fields.get(FIELD_EVENT).cloned(),
            fields: visitor.fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Events emitted by the calling thread
    pub fn events(&self) -> Vec<CapturedEvent> {
        let current = std::thread::current().id();
        self.events
            .lock()
            .map(|events| {
                events
                    .iter()
                    .filter(|e| e.thread == current)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Mismatch events emitted by the calling thread
    pub fn mismatches(&self) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.event.as_deref() == Some(EVENT_MISMATCH))
            .collect()
    }

    /// Assert that the calling thread logged a mismatch with this kind and reason
    ///
    /// # Panics
    ///
    /// Panics if no such event was captured
    pub fn assert_mismatch(&self, kind: &str, reason: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is_mismatch(kind, reason)),
            "Expected mismatch kind={} reason={} not found in {:?}",
            kind,
            reason,
            events
        );
    }

    /// Drop the calling thread's events
    pub fn clear(&self) {
        let current = std::thread::current().id();
        self.events
            .lock()
            .map(|mut events| events.retain(|e| e.thread != current))
            .ok();
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first use and
/// returns the shared handle. Do not combine with [`super::init`] in the
/// same test binary.
///
/// # Example
///
/// ```
/// use structeq_core::logging_facility::test_capture::init_test_capture;
/// use structeq_core::{deep_equal, Value};
///
/// let capture = init_test_capture();
/// deep_equal(&Value::from(1), &Value::from("1"));
/// capture.assert_mismatch("number", "type_family");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
