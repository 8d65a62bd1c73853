#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Verify the runner reports subscription lifecycle and navigation through
//! `tracing` events a host-installed subscriber can see.

use std::sync::{Arc, Mutex};

use teems_core::event::Event;
use teems_core::geometry::Rect;
use teems_core::intersection::ObserveOptions;
use teems_render::Node;
use teems_runtime::program::{Cmd, Model};
use teems_runtime::step_program::StepProgram;
use teems_runtime::subscription::{Subscription, ViewportEntry};
use tracing_subscriber::layer::SubscriberExt;

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: String,
    fields: Vec<(String, String)>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor {
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

fn with_captured_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

// ============================================================================
// Test model
// ============================================================================

#[derive(Default)]
struct Section {
    observing: bool,
    visible: bool,
}

enum SectionMsg {
    Observe,
    Entered,
    Ignored,
    Leave,
}

impl From<Event> for SectionMsg {
    fn from(event: Event) -> Self {
        match event {
            Event::Hydrated => SectionMsg::Observe,
            _ => SectionMsg::Ignored,
        }
    }
}

impl Model for Section {
    type Message = SectionMsg;

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        match msg {
            SectionMsg::Observe => self.observing = true,
            SectionMsg::Entered => self.visible = true,
            SectionMsg::Ignored => {}
            SectionMsg::Leave => return Cmd::navigate("/people"),
        }
        Cmd::none()
    }

    fn view(&self) -> Node {
        Node::empty()
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        if self.observing && !self.visible {
            vec![Box::new(ViewportEntry::new(
                "cta",
                ObserveOptions::threshold(0.2),
                |e| {
                    if e.is_intersecting {
                        SectionMsg::Entered
                    } else {
                        SectionMsg::Ignored
                    }
                },
            ))]
        } else {
            vec![]
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn subscription_lifecycle_is_logged() {
    let events = with_captured_events(|| {
        let mut prog = StepProgram::new(Section::default());
        prog.init();
        prog.push_event(Event::Hydrated);
        prog.push_event(Event::Viewport(Rect::from_size(800.0, 600.0)));
        prog.push_event(Event::Layout {
            target: "cta".into(),
            bounds: Rect::new(0.0, 100.0, 800.0, 200.0),
        });
        prog.step();
        assert!(prog.model().visible);
    });

    let starts: Vec<_> = events
        .iter()
        .filter(|e| e.message == "Starting subscription")
        .collect();
    let stops: Vec<_> = events
        .iter()
        .filter(|e| e.message == "Stopping subscription")
        .collect();
    assert_eq!(starts.len(), 1, "events: {events:?}");
    assert_eq!(stops.len(), 1, "events: {events:?}");
    assert_eq!(starts[0].level, tracing::Level::DEBUG);
    assert!(starts[0].fields.iter().any(|(k, _)| k == "sub_id"));
}

#[test]
fn navigation_is_logged_with_path() {
    let events = with_captured_events(|| {
        let mut prog = StepProgram::new(Section::default());
        prog.init();
        prog.send(SectionMsg::Leave);
        prog.step();
    });

    let nav = events
        .iter()
        .find(|e| e.message == "navigate")
        .expect("navigate event");
    assert!(nav.fields.iter().any(|(k, v)| k == "path" && v == "/people"));
}
