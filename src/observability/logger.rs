//! One-line JSON diagnostic records.
//!
//! - One record = one line, written synchronously, no buffering
//! - Deterministic key order (alphabetical)
//! - ERROR goes to stderr, everything else to stdout

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Record severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Normal operations
    Info,
    /// Degraded but recovered
    Warn,
    /// Operation failures
    Error,
}

impl Level {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured diagnostics writer.
pub struct Logger;

impl Logger {
    /// Emits an INFO record.
    pub fn info(event: &str, fields: &[(&str, String)]) {
        Self::emit(Level::Info, event, fields);
    }

    /// Emits a WARN record.
    pub fn warn(event: &str, fields: &[(&str, String)]) {
        Self::emit(Level::Warn, event, fields);
    }

    /// Emits an ERROR record.
    pub fn error(event: &str, fields: &[(&str, String)]) {
        Self::emit(Level::Error, event, fields);
    }

    /// Emits one record to the level's stream.
    pub fn emit(level: Level, event: &str, fields: &[(&str, String)]) {
        if level == Level::Error {
            Self::emit_to(level, event, fields, &mut io::stderr());
        } else {
            Self::emit_to(level, event, fields, &mut io::stdout());
        }
    }

    fn emit_to<W: Write>(level: Level, event: &str, fields: &[(&str, String)], writer: &mut W) {
        // serde_json::Map keeps keys sorted, which makes records
        // byte-for-byte reproducible for identical input.
        let mut record = Map::new();
        record.insert("event".into(), Value::String(event.into()));
        record.insert("level".into(), Value::String(level.as_str().into()));
        for (key, value) in fields {
            record.insert((*key).into(), Value::String(value.clone()));
        }

        let mut line = Value::Object(record).to_string();
        line.push('\n');

        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Capture a record to a string for testing
#[cfg(test)]
pub fn capture(level: Level, event: &str, fields: &[(&str, String)]) -> String {
    let mut buffer = Vec::new();
    Logger::emit_to(level, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}
