//! Text parser — verbatim content for `text_*` files.

use crate::parser::model::{ContentKind, ParseError, Payload};
use crate::parser::MAX_MESSAGE_SIZE;

use super::ContentParser;

/// Pass-through parser: content becomes the log message as-is.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub struct TextParser;

impl ContentParser for TextParser {
    fn parse(&self, raw: &[u8]) -> Result<Payload, ParseError> {
        if raw.len() > MAX_MESSAGE_SIZE {
            return Err(ParseError::TooLarge(raw.len(), MAX_MESSAGE_SIZE));
        }

        Ok(Payload::Text(String::from_utf8_lossy(raw).into_owned()))
    }

    fn kind(&self) -> ContentKind {
        ContentKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_parser_verbatim() {
        let payload = TextParser.parse(b"hello").unwrap();
        assert_eq!(payload, Payload::Text("hello".to_string()));
    }

    #[test]
    fn test_text_parser_keeps_whitespace() {
        let payload = TextParser.parse(b"two lines\nwith a trailing newline\n").unwrap();
        assert_eq!(payload, Payload::Text("two lines\nwith a trailing newline\n".to_string()));
    }

    #[test]
    fn test_text_parser_lossy_on_invalid_utf8() {
        let payload = TextParser.parse(b"\xFF\xFEoops").unwrap();
        match payload {
            Payload::Text(s) => assert!(s.contains("oops")),
            other => panic!("Expected text payload, got {:?}", other),
        }
    }

    #[test]
    fn test_text_parser_size_limit() {
        let oversized = vec![b'X'; MAX_MESSAGE_SIZE + 1];
        assert!(matches!(TextParser.parse(&oversized), Err(ParseError::TooLarge(_, _))));

        let just_under = vec![b'Y'; MAX_MESSAGE_SIZE];
        assert!(TextParser.parse(&just_under).is_ok());
    }
}
