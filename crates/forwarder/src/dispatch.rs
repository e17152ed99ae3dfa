//! Dispatch — route one decoded message file into the log sink.
//!
//! The routing rules, per content kind:
//!
//! - `Event` (`json_*`): the decoded record is attached under the nested
//!   `event` field; the log message text is the original filename.
//! - `Text` (`text_*`): the content is the log message, structured entry
//!   point, no fields.
//! - `Raw` (no underscore): the content is the log message, plain entry
//!   point.
//!
//! Each file is dispatched exactly once per cycle. Names that miss the
//! grammar are silent no-ops; malformed content is a per-file error the
//! caller logs and moves past.

use crate::parser::formats::parser_for;
use crate::parser::{decode_name, ContentKind, MessageName, ParseError, Payload, Severity, Skip};
use crate::sink::LogSink;

/// What one dispatch attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// One log record was emitted.
    Dispatched {
        severity: Severity,
        kind: ContentKind,
    },
    /// The name missed the grammar; nothing was emitted.
    Skipped(Skip),
}

/// Decode a filename and, if it matches the grammar, parse and emit its
/// content. Grammar misses return `Ok(Skipped)`; content failures return
/// the parse error for the caller's per-file policy.
pub fn dispatch(
    file_name: &str,
    content: &[u8],
    sink: &dyn LogSink,
    trace: bool,
) -> Result<Outcome, ParseError> {
    let name = match decode_name(file_name, trace) {
        Ok(name) => name,
        Err(skip) => return Ok(Outcome::Skipped(skip)),
    };
    dispatch_content(&name, content, sink)?;
    Ok(Outcome::Dispatched {
        severity: name.severity,
        kind: name.kind,
    })
}

/// Parse content per the decoded kind and emit exactly one record.
pub fn dispatch_content(
    name: &MessageName,
    content: &[u8],
    sink: &dyn LogSink,
) -> Result<(), ParseError> {
    let payload = parser_for(name.kind).parse(content)?;

    match payload {
        Payload::Event(record) => {
            let event = serde_json::to_value(&record)
                .map_err(|e| ParseError::MalformedEvent(e.to_string()))?;
            sink.emit_structured(name.severity, &name.file_name, Some(&event));
        }
        Payload::Text(text) => {
            sink.emit_structured(name.severity, &text, None);
        }
        Payload::Raw(text) => {
            sink.emit(name.severity, &text);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{EntryPoint, RecordingSink};

    fn dispatch_quiet(file_name: &str, content: &[u8], sink: &RecordingSink) -> Result<Outcome, ParseError> {
        dispatch(file_name, content, sink, false)
    }

    // ── No-ops ───────────────────────────────────────────────────

    #[test]
    fn test_too_few_segments_emits_nothing() {
        let sink = RecordingSink::new();
        let outcome = dispatch_quiet("standalone.msg", b"content", &sink).unwrap();
        assert_eq!(outcome, Outcome::Skipped(Skip::TooFewSegments));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_unknown_severity_emits_nothing_regardless_of_content() {
        let sink = RecordingSink::new();
        for content in [&b"plain text"[..], &br#"{"host":"h1"}"#[..]] {
            let outcome = dispatch_quiet("json_event-fatal.msg", content, &sink).unwrap();
            assert_eq!(outcome, Outcome::Skipped(Skip::UnknownSeverity));
        }
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_unknown_parser_emits_nothing() {
        let sink = RecordingSink::new();
        let outcome = dispatch_quiet("yaml_event-info.msg", b"whatever", &sink).unwrap();
        assert_eq!(outcome, Outcome::Skipped(Skip::UnknownParser));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_missing_extension_emits_nothing() {
        let sink = RecordingSink::new();
        let outcome = dispatch_quiet("text_app-info", b"hello", &sink).unwrap();
        assert_eq!(outcome, Outcome::Skipped(Skip::NotAMessage));
        assert!(sink.lines().is_empty());
    }

    // ── Text mode ────────────────────────────────────────────────

    #[test]
    fn test_text_round_trip() {
        let sink = RecordingSink::new();
        let outcome = dispatch_quiet("text_app-info.msg", b"hello", &sink).unwrap();
        assert_eq!(
            outcome,
            Outcome::Dispatched { severity: Severity::Info, kind: ContentKind::Text }
        );

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].severity, Severity::Info);
        assert_eq!(lines[0].message, "hello");
        assert_eq!(lines[0].event, None);
        assert_eq!(lines[0].entry, EntryPoint::Structured);
    }

    #[test]
    fn test_bare_text_token_round_trip() {
        // "text" with no underscore is raw mode, but the visible result is
        // the same: one INFO entry whose message is the content, no fields.
        let sink = RecordingSink::new();
        dispatch_quiet("text-info.msg", b"hello", &sink).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].severity, Severity::Info);
        assert_eq!(lines[0].message, "hello");
        assert_eq!(lines[0].event, None);
        assert_eq!(lines[0].entry, EntryPoint::Plain);
    }

    // ── Raw mode ─────────────────────────────────────────────────

    #[test]
    fn test_raw_mode_uses_plain_entry_point() {
        let sink = RecordingSink::new();
        let outcome = dispatch_quiet("plain-warn.msg", b"oops", &sink).unwrap();
        assert_eq!(
            outcome,
            Outcome::Dispatched { severity: Severity::Warn, kind: ContentKind::Raw }
        );

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].severity, Severity::Warn);
        assert_eq!(lines[0].message, "oops");
        assert_eq!(lines[0].entry, EntryPoint::Plain);
    }

    // ── Event mode ───────────────────────────────────────────────

    #[test]
    fn test_event_message_is_filename_with_nested_record() {
        let sink = RecordingSink::new();
        let content = br#"{"host":"h1","message":"m","pid":1,"tid":2,"timestamp":"t"}"#;
        let outcome = dispatch_quiet("json_event-debug.msg", content, &sink).unwrap();
        assert_eq!(
            outcome,
            Outcome::Dispatched { severity: Severity::Debug, kind: ContentKind::Event }
        );

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].severity, Severity::Debug);
        assert_eq!(lines[0].message, "json_event-debug.msg");
        assert_eq!(lines[0].entry, EntryPoint::Structured);
        assert_eq!(
            lines[0].event,
            Some(serde_json::json!({
                "host": "h1",
                "message": "m",
                "pid": 1,
                "tid": 2,
                "timestamp": "t",
            }))
        );
    }

    #[test]
    fn test_malformed_event_is_an_error_and_emits_nothing() {
        let sink = RecordingSink::new();
        let result = dispatch_quiet("json_event-info.msg", b"{not json", &sink);
        assert!(matches!(result, Err(ParseError::MalformedEvent(_))));
        assert!(sink.lines().is_empty());
    }

    // ── error / err equivalence ──────────────────────────────────

    #[test]
    fn test_error_and_err_produce_identical_output() {
        let content = br#"{"host":"h1","message":"m","pid":1,"tid":2,"timestamp":"t"}"#;

        let sink_error = RecordingSink::new();
        dispatch_quiet("json_event-error.msg", content, &sink_error).unwrap();
        let sink_err = RecordingSink::new();
        dispatch_quiet("json_event-err.msg", content, &sink_err).unwrap();

        let a = &sink_error.lines()[0];
        let b = &sink_err.lines()[0];
        assert_eq!(a.severity, Severity::Error);
        assert_eq!(a.severity, b.severity);
        assert_eq!(a.event, b.event);
        assert_eq!(a.entry, b.entry);
        // Message text differs only by the literal filename.
        assert_eq!(a.message, "json_event-error.msg");
        assert_eq!(b.message, "json_event-err.msg");
    }

    // ── Severity mapping ─────────────────────────────────────────

    #[test]
    fn test_all_severity_tokens_map_to_their_level() {
        let cases = [
            ("text_x-debug.msg", Severity::Debug),
            ("text_x-info.msg", Severity::Info),
            ("text_x-warn.msg", Severity::Warn),
            ("text_x-error.msg", Severity::Error),
            ("text_x-err.msg", Severity::Error),
        ];
        for (file_name, expected) in cases {
            let sink = RecordingSink::new();
            dispatch_quiet(file_name, b"x", &sink).unwrap();
            assert_eq!(sink.lines()[0].severity, expected, "for {}", file_name);
        }
    }

    #[test]
    fn test_trace_does_not_alter_dispatch() {
        let content = b"hello";
        let quiet = RecordingSink::new();
        dispatch("text_app-info.msg", content, &quiet, false).unwrap();
        let traced = RecordingSink::new();
        dispatch("text_app-info.msg", content, &traced, true).unwrap();
        assert_eq!(quiet.lines(), traced.lines());
    }
}
