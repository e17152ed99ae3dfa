//! Live — the `tracing`-backed sink.

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::parser::Severity;

use super::log::LogSink;

/// Emits through the `tracing` macros at the mapped level.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => debug!("{}", message),
            Severity::Info => info!("{}", message),
            Severity::Warn => warn!("{}", message),
            Severity::Error => error!("{}", message),
        }
    }

    fn emit_structured(&self, severity: Severity, message: &str, event: Option<&Value>) {
        match event {
            Some(event) => match severity {
                Severity::Debug => debug!(event = %event, "{}", message),
                Severity::Info => info!(event = %event, "{}", message),
                Severity::Warn => warn!(event = %event, "{}", message),
                Severity::Error => error!(event = %event, "{}", message),
            },
            // No fields to attach; the record is the same as a plain one
            // once it reaches a tracing subscriber.
            None => self.emit(severity, message),
        }
    }

    fn flush(&self) {
        // The fmt layer writes unbuffered to stdout; nothing to sync.
    }
}
