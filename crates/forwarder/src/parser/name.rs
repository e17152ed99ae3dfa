//! Name — the filename grammar.
//!
//! Wire format: `<typeToken>-<severityToken>[-ignored...].msg` where the
//! type token is either a bare name (raw mode) or `<parser>_<arbitrary>`
//! with `parser` one of `json` / `text`. Segments past the second are
//! ignored, so producers are free to append unique suffixes.

use tracing::info;

use super::model::{ContentKind, MessageName, Severity, Skip};
use super::MESSAGE_EXTENSION;

/// Decode a filename against the message grammar.
///
/// Returns `Err(Skip)` for any name that does not match; skips are silent
/// no-ops for the caller. With `trace` on, each intermediate decoding step
/// is emitted as its own INFO line for operator tracing; tracing never
/// alters the decision.
pub fn decode_name(file_name: &str, trace: bool) -> Result<MessageName, Skip> {
    if trace {
        info!(file = %file_name, "Processing message file");
    }

    let base = match file_name.strip_suffix(MESSAGE_EXTENSION) {
        Some(base) => base,
        None => return Err(Skip::NotAMessage),
    };
    if trace {
        info!(base = %base, "Message base name");
    }

    let segments: Vec<&str> = base.split('-').collect();
    if trace {
        info!(segments = ?segments, "File name segments");
    }
    if segments.len() < 2 {
        return Err(Skip::TooFewSegments);
    }

    let type_token = segments[0];
    let type_parts: Vec<&str> = type_token.split('_').collect();
    if trace {
        info!(type_token = %type_token, parts = ?type_parts, "Type token parts");
    }

    let severity = match Severity::from_token(segments[1]) {
        Some(severity) => severity,
        None => return Err(Skip::UnknownSeverity),
    };
    if trace {
        info!(severity = %severity.as_str(), "Severity token");
    }

    let kind = if type_parts.len() > 1 {
        match type_parts[0] {
            "json" => ContentKind::Event,
            "text" => ContentKind::Text,
            _ => return Err(Skip::UnknownParser),
        }
    } else {
        ContentKind::Raw
    };

    Ok(MessageName {
        file_name: file_name.to_string(),
        base: base.to_string(),
        kind,
        severity,
    })
}
