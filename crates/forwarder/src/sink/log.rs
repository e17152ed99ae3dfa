//! LogSink trait — abstract interface over the logging backend.

use serde_json::Value;

use crate::parser::Severity;

/// Severity-keyed emission into the logging backend.
///
/// Two entry points: a plain one for raw-mode messages, and a structured
/// one that can attach an arbitrary JSON-shaped value under the `event`
/// field. Implementations must be `Send + Sync`.
pub trait LogSink: Send + Sync {
    /// Plain emission entry point.
    fn emit(&self, severity: Severity, message: &str);

    /// Structured emission entry point.
    ///
    /// When `event` is present it is attached as a single nested `event`
    /// field on the record; when absent the record carries no fields.
    fn emit_structured(&self, severity: Severity, message: &str, event: Option<&Value>);

    /// Flush buffered output. Invoked once at shutdown.
    fn flush(&self);
}
