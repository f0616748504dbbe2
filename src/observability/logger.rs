//! Structured JSON event logger
//!
//! One line per event: `event` first, then `severity`, then the caller's
//! fields sorted by key. INFO and below go to stdout, ERROR and FATAL to
//! stderr. Writes are synchronous and unbuffered.

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info = 0,
    /// Rejected request or recoverable issue
    Warn = 1,
    /// Failed request or store operation
    Error = 2,
    /// Process cannot continue
    Fatal = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Whether events at this level belong on stderr
    pub fn is_error(&self) -> bool {
        *self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process-wide event logger
pub struct Logger;

impl Logger {
    /// Log an event, routing it to stdout or stderr by severity
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if severity.is_error() {
            Self::write_line(severity, event, fields, &mut io::stderr());
        } else {
            Self::write_line(severity, event, fields, &mut io::stdout());
        }
    }

    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }

    fn write_line<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let line = Self::format_line(severity, event, fields);
        // Logging never fails the caller.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut line = String::with_capacity(128);

        line.push_str("{\"event\":\"");
        push_escaped(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        for (key, value) in sorted {
            line.push_str(",\"");
            push_escaped(&mut line, key);
            line.push_str("\":\"");
            push_escaped(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");
        line
    }
}

fn push_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buffer = Vec::new();
        Logger::write_line(severity, event, fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_error_routing() {
        assert!(!Severity::Info.is_error());
        assert!(!Severity::Warn.is_error());
        assert!(Severity::Error.is_error());
        assert!(Severity::Fatal.is_error());
    }

    #[test]
    fn test_line_is_json() {
        let output = capture(Severity::Info, "FRUIT_CREATED", &[("id", "abc")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "FRUIT_CREATED");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["id"], "abc");
    }

    #[test]
    fn test_fields_sorted_after_event_and_severity() {
        let a = capture(Severity::Warn, "E", &[("zebra", "1"), ("apple", "2")]);
        let b = capture(Severity::Warn, "E", &[("apple", "2"), ("zebra", "1")]);
        assert_eq!(a, b);
        assert_eq!(a, "{\"event\":\"E\",\"severity\":\"WARN\",\"apple\":\"2\",\"zebra\":\"1\"}\n");
    }

    #[test]
    fn test_special_chars_escaped() {
        let output = capture(Severity::Error, "E", &[("error", "bad \"id\"\n\u{1}")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["error"], "bad \"id\"\n\u{1}");
        assert_eq!(output.matches('\n').count(), 1);
    }
}
