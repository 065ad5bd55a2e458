//! Structured JSON logger.
//!
//! One log line is one event: severity is explicit, keys come out in
//! deterministic (sorted) order, and writes are synchronous with no
//! buffering.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured logger that writes one JSON object per event.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stdout());
    }

    /// Log to stderr (for errors surfaced to the terminal).
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(severity, event, fields, &mut io::stderr());
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        // A BTreeMap gives sorted, deterministic key order. The reserved
        // keys win over a colliding field key.
        let mut record: BTreeMap<&str, &str> = BTreeMap::new();
        for (key, value) in fields.iter().copied() {
            record.insert(key, value);
        }
        record.insert("event", event);
        record.insert("severity", severity.as_str());

        if let Ok(line) = serde_json::to_string(&record) {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
