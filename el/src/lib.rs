//! EventListener - supervisor event listener
//!
//! Speaks the listener side of a supervisor's event-notification handshake
//! over stdin/stdout, appending one timestamp per event to an audit log.
//!
//! # Protocol
//!
//! ```text
//! listener   -> supervisor   READY\n
//! supervisor -> listener     ver:3.0 server:supervisor serial:21 ... len:54\n
//!                            <54 bytes of payload>
//! listener   -> supervisor   RESULT 2\nOK
//! ```
//!
//! # Example
//!
//! ```ignore
//! use eventlistener::{Listener, ListenerConfig};
//!
//! let stdin = std::io::stdin().lock();
//! let mut listener = Listener::new(stdin, std::io::stdout(), std::io::stderr(), ListenerConfig::default());
//! let cycles = listener.run()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod header;
pub mod listener;
pub mod protocol;

pub use audit::AuditLog;
pub use config::{Announce, Config};
pub use error::{HeaderError, ListenerError};
pub use header::{EventHeader, Headers};
pub use listener::{Cycle, Listener, ListenerConfig};

/// Default audit log path, relative to the working directory
pub const DEFAULT_AUDIT_LOG: &str = "tmp/date.log";

/// Default acknowledgment body
pub const DEFAULT_RESULT_BODY: &str = "OK";

/// Length announced in `RESULT <n>` when the announcement is not computed
pub const LITERAL_RESULT_LEN: usize = 2;
