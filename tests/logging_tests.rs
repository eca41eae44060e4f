use guardtext::{CollectionExt, RangeExt, StringValues, TextExt};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone, PartialEq)]
struct Captured {
    target: String,
    level: tracing::Level,
    param: Option<String>,
    message: Option<String>,
}

/// Layer that records every event it sees.
#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureLayer {
    fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct FieldVisitor {
    param: Option<String>,
    message: Option<String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "param" {
            self.param = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{:?}", value)),
            "param" => self.param = Some(format!("{:?}", value)),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            target: event.metadata().target().to_string(),
            level: *event.metadata().level(),
            param: visitor.param,
            message: visitor.message,
        });
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, layer.events())
}

#[test]
fn test_guard_failure_emits_one_debug_event() {
    let (result, events) = capture(|| "  ".ensure_non_blank("name"));

    assert!(result.is_err());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target, "guardtext::guard");
    assert_eq!(events[0].level, tracing::Level::DEBUG);
    assert_eq!(events[0].param.as_deref(), Some("name"));
    let err = result.unwrap_err();
    assert_eq!(events[0].message.as_deref(), Some(err.to_string().as_str()));
}

#[test]
fn test_each_guard_kind_is_logged_with_its_param() {
    let (_, events) = capture(|| {
        let _ = Vec::<u8>::new().ensure_non_empty("ids");
        let _ = (-1i32).ensure_non_negative("retries");
        let _ = StringValues::new().ensure_non_blank("headers");
        let _ = None::<&str>.ensure_non_blank("token");
    });

    let params: Vec<_> = events.iter().map(|e| e.param.as_deref()).collect();
    assert_eq!(
        params,
        vec![Some("ids"), Some("retries"), Some("headers"), Some("token")]
    );
    assert!(events.iter().all(|e| e.target == "guardtext::guard"));
}

#[test]
fn test_passing_guards_emit_nothing() {
    let (result, events) = capture(|| {
        "x".ensure_non_blank("name")?;
        vec![1].ensure_non_empty("ids")?;
        5u8.ensure_positive("count")?;
        Ok::<_, guardtext::Error>(())
    });

    assert!(result.is_ok());
    assert!(events.is_empty());
}
