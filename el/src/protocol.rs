//! READY / RESULT framing toward the supervisor
//!
//! Every frame is flushed as soon as it is written; the supervisor blocks on
//! these tokens.

use std::io::{self, Write};

use crate::config::Announce;

/// Readiness token, sent before each event is read
pub const READY: &[u8] = b"READY\n";

/// Tell the supervisor the listener is ready for the next event
pub fn write_ready<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(READY)?;
    out.flush()
}

/// Build a `RESULT <n>\n<body>` frame
pub fn result_frame(body: &str, announce: Announce) -> Vec<u8> {
    let len = announce.length_for(body);
    let mut frame = format!("RESULT {}\n", len).into_bytes();
    frame.extend_from_slice(body.as_bytes());
    frame
}

/// Acknowledge the current event
pub fn write_result<W: Write>(out: &mut W, body: &str, announce: Announce) -> io::Result<()> {
    out.write_all(&result_frame(body, announce))?;
    out.flush()
}
