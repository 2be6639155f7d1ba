//! Non-fatal conversion diagnostics.
//!
//! Malformed entries never abort a conversion. Every skipped entry and
//! every fallback value is recorded here, so nothing is dropped silently
//! and callers can report the collected warnings once the document is done.

/// Warnings collected during a single document conversion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning identifying the offending key or cell.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Number of collected warnings.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over the collected messages in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|s| s.as_str())
    }

    /// Print every message to stderr as a `Warning:` line.
    pub fn print_to_stderr(&self) {
        for message in &self.messages {
            eprintln!("Warning: {}", message);
        }
    }
}
