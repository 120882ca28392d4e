//! Header line parsing
//!
//! A header line is a run of whitespace-separated `key:value` tokens. When a
//! key repeats, the last occurrence wins.

use std::collections::HashMap;

use crate::error::HeaderError;

/// Key carrying the payload length
pub const LEN_KEY: &str = "len";

/// Parsed header tokens for one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: HashMap<String, String>,
}

impl Headers {
    /// Parse a raw header line (trailing newline allowed)
    pub fn parse(line: &str) -> Result<Self, HeaderError> {
        let mut entries = HashMap::new();

        for token in line.split_whitespace() {
            let mut parts = token.split(':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => {
                    entries.insert(key.to_string(), value.to_string());
                }
                _ => {
                    return Err(HeaderError::MalformedToken {
                        token: token.to_string(),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Payload length announced by the `len` token
    pub fn payload_len(&self) -> Result<usize, HeaderError> {
        let value = self.get(LEN_KEY).ok_or(HeaderError::MissingLength)?;
        value.parse().map_err(|_| HeaderError::InvalidLength {
            value: value.to_string(),
        })
    }
}

/// Typed view over the standard supervisor header tokens
///
/// Only `len` is required. The rest are informational and come back as
/// `None` when absent or unparseable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHeader {
    pub ver: Option<String>,
    pub server: Option<String>,
    pub serial: Option<u64>,
    pub pool: Option<String>,
    pub pool_serial: Option<u64>,
    pub event_name: Option<String>,
    pub len: usize,
}

impl EventHeader {
    pub fn from_headers(headers: &Headers) -> Result<Self, HeaderError> {
        let text = |key: &str| headers.get(key).map(str::to_string);
        let number = |key: &str| headers.get(key).and_then(|v| v.parse().ok());

        Ok(Self {
            ver: text("ver"),
            server: text("server"),
            serial: number("serial"),
            pool: text("pool"),
            pool_serial: number("poolserial"),
            event_name: text("eventname"),
            len: headers.payload_len()?,
        })
    }

    /// Event name for log lines, `UNKNOWN` when the supervisor sent none
    pub fn display_name(&self) -> &str {
        self.event_name.as_deref().unwrap_or("UNKNOWN")
    }
}

impl std::str::FromStr for EventHeader {
    type Err = HeaderError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::from_headers(&Headers::parse(line)?)
    }
}
