#![warn(missing_docs)]
//! Test and replay surfaces for the layout editor (event logs, golden snapshots).

mod snapshot;
mod step_snapshot;

use anyhow::Result;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use snapshot::*;
pub use step_snapshot::*;

/// One applied editor input, as written to an event log.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a> {
    /// Position of the input in its script (1-based).
    pub step: u64,
    /// Event kind label (e.g. `pointer_move`).
    pub kind: &'a str,
    /// How the editor handled the event.
    pub outcome: &'a str,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append an event to the log.
    pub fn write(&mut self, event: &EventRecord<'_>) -> Result<()> {
        let line = serde_json::to_string(event)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}
