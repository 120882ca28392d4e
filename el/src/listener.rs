//! The handshake loop
//!
//! Each cycle: READY, read one header line and its payload, echo both to the
//! diagnostic stream, append a timestamp to the audit log, then RESULT. Any
//! error ends the cycle before RESULT is written.

use log::{debug, info, warn};
use std::io::{BufRead, Read, Write};
use std::path::PathBuf;

use crate::audit::AuditLog;
use crate::config::Announce;
use crate::error::ListenerError;
use crate::header::{EventHeader, Headers};
use crate::protocol;

/// Explicit settings threaded into the listener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    pub audit_log: PathBuf,
    pub result_body: String,
    pub announce: Announce,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            audit_log: PathBuf::from(crate::DEFAULT_AUDIT_LOG),
            result_body: crate::DEFAULT_RESULT_BODY.to_string(),
            announce: Announce::default(),
        }
    }
}

/// Outcome of one handshake cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cycle {
    /// Event read, logged and acknowledged
    Acknowledged { header: EventHeader, payload: Vec<u8> },

    /// Input closed while waiting for a header
    EndOfInput,
}

/// Listener side of the supervisor handshake
///
/// `input` carries headers and payloads, `output` carries READY/RESULT
/// frames and `diagnostics` receives the per-event echo.
pub struct Listener<R, W, E> {
    input: R,
    output: W,
    diagnostics: E,
    audit: AuditLog,
    result_body: String,
    announce: Announce,
}

impl<R: BufRead, W: Write, E: Write> Listener<R, W, E> {
    pub fn new(input: R, output: W, diagnostics: E, config: ListenerConfig) -> Self {
        debug!(
            "Listener::new: audit_log={} announce={:?}",
            config.audit_log.display(),
            config.announce
        );
        Self {
            input,
            output,
            diagnostics,
            audit: AuditLog::new(&config.audit_log),
            result_body: config.result_body,
            announce: config.announce,
        }
    }

    /// Run cycles until input closes, returning how many were acknowledged
    pub fn run(&mut self) -> Result<usize, ListenerError> {
        let mut acknowledged = 0;
        loop {
            match self.run_cycle()? {
                Cycle::Acknowledged { .. } => acknowledged += 1,
                Cycle::EndOfInput => {
                    info!("Input closed after {} events", acknowledged);
                    return Ok(acknowledged);
                }
            }
        }
    }

    /// Run a single READY -> header/payload -> RESULT cycle
    pub fn run_cycle(&mut self) -> Result<Cycle, ListenerError> {
        protocol::write_ready(&mut self.output)?;

        let mut raw_line = Vec::new();
        if self.input.read_until(b'\n', &mut raw_line)? == 0 {
            return Ok(Cycle::EndOfInput);
        }

        let line = String::from_utf8_lossy(&raw_line);
        let headers = Headers::parse(&line)?;
        let header = EventHeader::from_headers(&headers)?;

        let mut payload = Vec::new();
        (&mut self.input).take(header.len as u64).read_to_end(&mut payload)?;
        if payload.len() < header.len {
            warn!("Short payload: expected {} bytes, got {}", header.len, payload.len());
        }

        self.echo(&raw_line, &payload)?;
        let stamp = self.audit.record_now()?;

        protocol::write_result(&mut self.output, &self.result_body, self.announce)?;

        info!(
            "Acknowledged {} (serial {:?}, {} bytes) at {}",
            header.display_name(),
            header.serial,
            payload.len(),
            stamp
        );
        Ok(Cycle::Acknowledged { header, payload })
    }

    /// Echo `line: <header><payload>\n` to the diagnostic stream
    fn echo(&mut self, raw_line: &[u8], payload: &[u8]) -> std::io::Result<()> {
        self.diagnostics.write_all(b"line: ")?;
        self.diagnostics.write_all(raw_line)?;
        self.diagnostics.write_all(payload)?;
        self.diagnostics.write_all(b"\n")?;
        self.diagnostics.flush()
    }
}
