//! Append-only activity log.
//!
//! Every batch writes its progress to one line-oriented sink, normally
//! `image_processing.log` in the working directory, opened once at startup in
//! append mode. The log is a plain value passed by `&mut` to whoever reports
//! progress; there is no global logger behind it.
//!
//! ## Line format
//!
//! ```text
//! 2026-10-16 09:41:07,512:INFO:Entering folder: images/shoes
//! 2026-10-16 09:41:07,530:WARNING:Skipped file (unsupported extension): images/shoes/notes.txt
//! 2026-10-16 09:41:07,911:ERROR:Failed to process images/shoes/b.jpg: ...
//! ```
//!
//! Each record is also forwarded to `tracing`, so `RUST_LOG` can surface the
//! same lines on stderr while a batch runs.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// `asctime`-style timestamp: date, time, and milliseconds after a comma.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Error, Debug)]
#[error("cannot open log file {}: {source}", .path.display())]
pub struct LogError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Severity of a record. Ordered, so a threshold filters everything below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        })
    }
}

/// Render one log line (without the trailing newline).
pub fn format_line(timestamp: &str, level: Level, message: &str) -> String {
    format!("{timestamp}:{level}:{message}")
}

pub struct ActivityLog {
    sink: Box<dyn Write + Send>,
    threshold: Level,
}

impl ActivityLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path, threshold: Level) -> Result<Self, LogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_writer(file, threshold))
    }

    /// Log into an arbitrary writer.
    pub fn from_writer(writer: impl Write + Send + 'static, threshold: Level) -> Self {
        Self {
            sink: Box::new(writer),
            threshold,
        }
    }

    pub fn record(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!("{message}"),
            Level::Warning => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
        }

        if level < self.threshold {
            return;
        }

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = format_line(&timestamp, level, message);
        // A broken log sink must not abort the batch.
        if let Err(e) = writeln!(self.sink, "{line}").and_then(|()| self.sink.flush()) {
            tracing::warn!("activity log write failed: {e}");
        }
    }

    pub fn info(&mut self, message: &str) {
        self.record(Level::Info, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.record(Level::Warning, message);
    }

    pub fn error(&mut self, message: &str) {
        self.record(Level::Error, message);
    }
}
