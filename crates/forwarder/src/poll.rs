//! Poll — list the watched directory and run one forwarding cycle.
//!
//! A cycle re-reads the listing from scratch; no state is carried across
//! ticks. Per-file failures are logged and skipped so one bad message
//! cannot halt forwarding. Files are deleted only after a successful
//! dispatch; no-op files are left in place untouched.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::conf::ForwarderConfig;
use crate::dispatch::{self, Outcome};
use crate::sink::LogSink;

/// One regular file found during a poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFile {
    /// Bare filename, the input to the message grammar.
    pub name: String,
    pub path: PathBuf,
}

/// Counters for one completed cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Regular files seen in the listing.
    pub seen: usize,
    /// Files decoded, emitted, and deleted.
    pub dispatched: usize,
    /// Grammar no-ops, left in place.
    pub skipped: usize,
    /// Read or parse failures, logged and left in place.
    pub failed: usize,
}

/// List the directory's regular files, sorted by name.
///
/// Subdirectories are filtered out. The sort keeps processing order
/// deterministic across platforms whose readdir order differs.
pub async fn list_message_files(dir: &Path) -> io::Result<Vec<MessageFile>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let file_type = entry.file_type().await?;
        if file_type.is_dir() {
            continue;
        }
        files.push(MessageFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Run one full poll cycle: list, then decode/dispatch/delete every file.
///
/// A failed listing is logged and yields an empty cycle; the next tick
/// retries with a fresh listing.
pub async fn run_cycle(config: &ForwarderConfig, sink: &dyn LogSink) -> CycleStats {
    let mut stats = CycleStats::default();

    let files = match list_message_files(Path::new(&config.message_path)).await {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to list message directory {}: {}", config.message_path, e);
            return stats;
        }
    };
    stats.seen = files.len();

    for file in files {
        match process_file(&file, sink, config.debug).await {
            Ok(Outcome::Dispatched { .. }) => stats.dispatched += 1,
            Ok(Outcome::Skipped(_)) => stats.skipped += 1,
            Err(()) => stats.failed += 1,
        }
    }

    stats
}

/// Decode, read, dispatch, and delete one file.
///
/// `Err(())` means the failure was already logged here; the caller only
/// counts it.
async fn process_file(file: &MessageFile, sink: &dyn LogSink, trace: bool) -> Result<Outcome, ()> {
    // Decode before reading; no-op files are never opened.
    let name = match crate::parser::decode_name(&file.name, trace) {
        Ok(name) => name,
        Err(skip) => return Ok(Outcome::Skipped(skip)),
    };

    let content = match tokio::fs::read(&file.path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // A producer or operator removed it between listing and read.
            warn!("Message file {} vanished before it could be read", file.name);
            return Err(());
        }
        Err(e) => {
            error!("Failed to read message file {}: {}", file.name, e);
            return Err(());
        }
    };

    if let Err(e) = dispatch::dispatch_content(&name, &content, sink) {
        error!("Failed to dispatch message file {}: {}", file.name, e);
        return Err(());
    }

    // Delete only after a successful dispatch.
    if let Err(e) = tokio::fs::remove_file(&file.path).await {
        warn!("Failed to remove processed message file {}: {}", file.name, e);
    }

    Ok(Outcome::Dispatched {
        severity: name.severity,
        kind: name.kind,
    })
}
