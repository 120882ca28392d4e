//! Append-only audit log
//!
//! One line per event holding the local time it was handled. The file is
//! opened and closed for every record; the parent directory must already
//! exist.

use chrono::{DateTime, Local, TimeZone, Timelike};
use log::debug;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ListenerError;

/// Timestamp layout with and without the fractional part
const FORMAT_MICROS: &str = "%Y-%m-%d %H:%M:%S%.6f";
const FORMAT_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS.ffffff`
///
/// The fractional part is dropped when it is exactly zero microseconds.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if at.nanosecond() / 1_000 == 0 {
        at.format(FORMAT_SECONDS).to_string()
    } else {
        at.format(FORMAT_MICROS).to_string()
    }
}

#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record for the current local time
    pub fn record_now(&self) -> Result<String, ListenerError> {
        self.record(&Local::now())
    }

    /// Append a record for `at`, returning the rendered timestamp
    pub fn record<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> Result<String, ListenerError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let stamp = format_timestamp(at);
        let audit_err = |source: std::io::Error| ListenerError::Audit {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(audit_err)?;
        writeln!(file, "{}", stamp).map_err(audit_err)?;

        debug!("AuditLog::record: appended {} to {}", stamp, self.path.display());
        Ok(stamp)
    }
}
