//! Event parser — the fixed JSON record carried by `json_*` files.

use crate::parser::model::{ContentKind, EventRecord, ParseError, Payload};
use crate::parser::MAX_MESSAGE_SIZE;

use super::ContentParser;

/// Parses content as the fixed `{host, message, pid, tid, timestamp}` record.
pub struct EventParser;

impl ContentParser for EventParser {
    fn parse(&self, raw: &[u8]) -> Result<Payload, ParseError> {
        if raw.len() > MAX_MESSAGE_SIZE {
            return Err(ParseError::TooLarge(raw.len(), MAX_MESSAGE_SIZE));
        }

        let record: EventRecord = serde_json::from_slice(raw)
            .map_err(|e| ParseError::MalformedEvent(e.to_string()))?;

        Ok(Payload::Event(record))
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Event
    }
}
