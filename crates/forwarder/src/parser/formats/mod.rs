/// Individual content parsers, one per content kind

pub mod json;
pub mod text;
pub mod raw;

// Re-export parser implementations
pub use json::EventParser;
pub use text::TextParser;
pub use raw::RawParser;

use super::model::{ContentKind, ParseError, Payload};

/// Parses message file content into a dispatchable payload.
pub trait ContentParser: Send + Sync {
    fn parse(&self, raw: &[u8]) -> Result<Payload, ParseError>;
    fn kind(&self) -> ContentKind;
}

/// Look up the parser selected by a decoded type token.
pub fn parser_for(kind: ContentKind) -> &'static dyn ContentParser {
    match kind {
        ContentKind::Event => &EventParser,
        ContentKind::Text => &TextParser,
        ContentKind::Raw => &RawParser,
    }
}
