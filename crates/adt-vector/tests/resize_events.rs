//! Reallocation events emitted through `tracing`.
//!
//! A recording layer captures every event while a closure runs under a
//! thread-local subscriber, so tests in this file can run in parallel.

use std::fmt;
use std::sync::{Arc, Mutex};

use adt_vector::DynamicVector;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

#[derive(Clone, Debug, Default, PartialEq)]
struct Resize {
    direction: String,
    from: u64,
    to: u64,
    len: u64,
}

impl Resize {
    fn new(direction: &str, from: u64, to: u64, len: u64) -> Self {
        Self {
            direction: direction.to_string(),
            from,
            to,
            len,
        }
    }
}

impl Visit for Resize {
    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "from" => self.from = value,
            "to" => self.to = value,
            "len" => self.len = value,
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "direction" {
            self.direction = value.to_string();
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Resize>>>,
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        assert_eq!(*event.metadata().level(), Level::TRACE);
        let mut resize = Resize::default();
        event.record(&mut resize);
        self.events.lock().unwrap().push(resize);
    }
}

fn record(f: impl FnOnce()) -> Vec<Resize> {
    let recorder = Recorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = recorder.events.lock().unwrap().clone();
    events
}

#[test]
fn every_reallocation_is_traced() {
    let events = record(|| {
        let mut v = DynamicVector::with_capacity(2).unwrap();
        for c in ['a', 'b', 'c'] {
            v.push(c);
        }
        v.insert(1, 'x').unwrap();
        v.remove(2).unwrap();
        v.pop().unwrap();
        v.push('d');
    });
    assert_eq!(
        events,
        vec![
            Resize::new("grow", 2, 4, 2),
            Resize::new("grow", 4, 8, 4),
            Resize::new("shrink", 8, 4, 3),
            Resize::new("shrink", 4, 2, 2),
            Resize::new("grow", 2, 4, 2),
        ]
    );
}

#[test]
fn unchanged_capacity_emits_nothing() {
    let events = record(|| {
        let mut v = DynamicVector::with_capacity(1).unwrap();
        v.push(1u8);
        assert_eq!(v.pop(), Ok(1));
        assert_eq!(v.capacity(), 1);
    });
    assert!(events.is_empty(), "unexpected events: {events:?}");
}
