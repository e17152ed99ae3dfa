//! Model — severity levels, content kinds, decoded names, and payloads.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logging level a message file is dispatched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Map a filename severity token to a level.
    ///
    /// Producers write either `error` or `err`; both map to the single
    /// ERROR level. Anything else is unrecognized and makes the whole
    /// file a no-op.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "debug" => Some(Severity::Debug),
            "info" => Some(Severity::Info),
            "warn" => Some(Severity::Warn),
            "error" | "err" => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// Content parser selected by the type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// `json_*` type token: content is the fixed event record.
    Event,
    /// `text_*` type token: content is logged verbatim, no fields.
    Text,
    /// Type token with no underscore: content is logged verbatim through
    /// the plain entry point.
    Raw,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Event => "event",
            ContentKind::Text => "text",
            ContentKind::Raw => "raw",
        }
    }
}

/// Why a filename was examined but produced no dispatch.
///
/// None of these are errors: the file is left in place and nothing is
/// logged (unless step tracing is on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Name does not end in the message extension.
    NotAMessage,
    /// Fewer than two hyphen-delimited segments.
    TooFewSegments,
    /// Severity token outside the recognized set.
    UnknownSeverity,
    /// Underscore-bearing type token with an unrecognized parser name.
    UnknownParser,
}

/// A filename decoded against the message grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageName {
    /// Original filename, extension included.
    pub file_name: String,
    /// Filename with the extension stripped.
    pub base: String,
    pub kind: ContentKind,
    pub severity: Severity,
}

/// The fixed record carried by `json_*` message files.
///
/// Missing fields default to zero values and unknown fields are ignored;
/// only malformed JSON or a type mismatch fails the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    pub host: String,
    pub message: String,
    pub pid: i64,
    pub tid: i64,
    pub timestamp: String,
}

/// Parsed message content, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Event(EventRecord),
    Text(String),
    Raw(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed event payload: {0}")]
    MalformedEvent(String),

    #[error("message too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),
}
