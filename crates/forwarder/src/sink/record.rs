//! Record — test double for the logging backend.
//!
//! Provides a deterministic [`RecordingSink`] that implements [`LogSink`]
//! by capturing every emission in memory. Useful for asserting exactly
//! what dispatch produced without parsing subscriber output.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::Value;

use crate::parser::Severity;

use super::log::LogSink;

/// Which trait entry point produced a recorded line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Plain,
    Structured,
}

/// One captured emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub severity: Severity,
    pub message: String,
    pub event: Option<Value>,
    pub entry: EntryPoint,
}

/// A fake sink for deterministic testing.
#[derive(Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<Recorded>>,
    flushes: AtomicUsize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in order.
    pub fn lines(&self) -> Vec<Recorded> {
        self.lines.lock().expect("recording sink poisoned").clone()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, severity: Severity, message: &str) {
        self.lines.lock().expect("recording sink poisoned").push(Recorded {
            severity,
            message: message.to_string(),
            event: None,
            entry: EntryPoint::Plain,
        });
    }

    fn emit_structured(&self, severity: Severity, message: &str, event: Option<&Value>) {
        self.lines.lock().expect("recording sink poisoned").push(Recorded {
            severity,
            message: message.to_string(),
            event: event.cloned(),
            entry: EntryPoint::Structured,
        });
    }

    fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::SeqCst);
    }
}
