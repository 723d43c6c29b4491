//! Reporting of entries and fields the converter had to skip.
//!
//! Per-entry failures never abort a conversion. They are handed to a [`DiagnosticSink`]
//! chosen by the caller: the CLI logs them, tests collect them into a `Vec`.

use log::warn;
use std::fmt;

/// What was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The whole entry was ignored (e.g. its URL could not be parsed)
    EntrySkipped,
    /// The request body was not valid JSON
    RequestBodySkipped,
    /// The response body was not valid JSON
    ResponseBodySkipped,
}

/// One skipped entry or field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Index of the capture in the conversion input
    pub capture_index: usize,
    /// Index of the entry within its capture
    pub entry_index: usize,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capture {} entry {}: {:?}: {}",
            self.capture_index, self.entry_index, self.kind, self.message
        )
    }
}

/// Receiver for diagnostics produced during a conversion.
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Sink that forwards every diagnostic to the `log` facade at warn level.
#[derive(Debug, Default)]
pub struct LogSink {
    recorded: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics logged so far
    pub fn recorded(&self) -> usize {
        self.recorded
    }
}

impl DiagnosticSink for LogSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.recorded += 1;
        warn!("{}", diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnostic {
        Diagnostic {
            capture_index: 0,
            entry_index: 3,
            kind: DiagnosticKind::EntrySkipped,
            message: "relative URL without a base".to_string(),
        }
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.record(sample());
        assert_eq!(sink, vec![sample()]);
    }

    #[test]
    fn test_log_sink_counts() {
        let mut sink = LogSink::new();
        sink.record(sample());
        sink.record(sample());
        assert_eq!(sink.recorded(), 2);
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.contains("entry 3"));
        assert!(text.contains("EntrySkipped"));
    }
}
