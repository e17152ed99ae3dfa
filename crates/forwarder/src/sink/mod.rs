//! Sink module — the structured-logging backend seam.
//!
//! Dispatch talks to the backend through the [`LogSink`] trait.
//! `live.rs` provides the real `tracing`-backed implementation.
//! `record.rs` provides a test double.

pub mod log;
pub mod live;
pub mod record;

pub use log::LogSink;
pub use live::TracingSink;
pub use record::{EntryPoint, Recorded, RecordingSink};
