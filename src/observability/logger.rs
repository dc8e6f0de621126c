//! Structured one-line JSON logging.
//!
//! Operator-visible events from the synchronization engine: watch setup,
//! scan summaries, per-namespace loads and unloads, and load failures.
//! One log line is one event; keys are emitted in deterministic order
//! (event code, severity, then fields alphabetically); errors go to stderr.

use std::fmt;
use std::io::{self, Write};

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operation
    Info,
    /// Recoverable issue, processing continues
    Warn,
    /// Operation failure
    Error,
}

impl Severity {
    fn as_str(self) -> &'static str {
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

/// Synchronous, unbuffered JSON-lines logger.
pub struct Logger;

impl Logger {
    /// Log a normal operational event to stdout.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        let _ = emit(&mut io::stdout(), Severity::Info, event, fields);
    }

    /// Log a recoverable issue to stderr.
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        let _ = emit(&mut io::stderr(), Severity::Warn, event, fields);
    }

    /// Log an operation failure to stderr.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        let _ = emit(&mut io::stderr(), Severity::Error, event, fields);
    }
}

fn emit<W: Write>(
    writer: &mut W,
    severity: Severity,
    event: &str,
    fields: &[(&str, &str)],
) -> io::Result<()> {
    let mut line = String::with_capacity(128);
    line.push('{');
    push_pair(&mut line, "event", event);
    line.push(',');
    push_pair(&mut line, "severity", severity.as_str());

    let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
    sorted.sort_by_key(|(key, _)| *key);
    for (key, value) in sorted {
        line.push(',');
        push_pair(&mut line, key, value);
    }

    line.push_str("}\n");
    writer.write_all(line.as_bytes())?;
    writer.flush()
}

fn push_pair(line: &mut String, key: &str, value: &str) {
    line.push('"');
    escape_into(line, key);
    line.push_str("\":\"");
    escape_into(line, value);
    line.push('"');
}

fn escape_into(line: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                use fmt::Write as _;
                let _ = write!(line, "\\u{:04x}", c as u32);
            }
            c => line.push(c),
        }
    }
}
