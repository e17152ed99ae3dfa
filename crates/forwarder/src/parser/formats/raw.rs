//! Raw parser — underscore-free type tokens.
//!
//! Same pass-through as the text parser, but the payload is tagged for the
//! plain (non-structured) emission entry point.

use crate::parser::model::{ContentKind, ParseError, Payload};
use crate::parser::MAX_MESSAGE_SIZE;

use super::ContentParser;

pub struct RawParser;

impl ContentParser for RawParser {
    fn parse(&self, raw: &[u8]) -> Result<Payload, ParseError> {
        if raw.len() > MAX_MESSAGE_SIZE {
            return Err(ParseError::TooLarge(raw.len(), MAX_MESSAGE_SIZE));
        }

        Ok(Payload::Raw(String::from_utf8_lossy(raw).into_owned()))
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Raw
    }
}
