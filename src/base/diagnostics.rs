use serde::Serialize;
use std::fmt;

/// Indicates how relevant a diagnostic message is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Something noteworthy happened but the result is reliable
    Info,

    /// The input or the result lies outside the expected physical range
    Warning,
}

/// Holds a single non-fatal message emitted while validating or evaluating
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Name of the parameter or quantity the message refers to
    pub field: &'static str,

    /// Human-readable explanation
    pub message: String,

    /// Severity level
    pub severity: Severity,
}

/// Collects diagnostic messages
///
/// Validation and the volume solver never stop on suspicious input; instead they
/// push messages here so the caller decides what to do with them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        Diagnostics { entries: Vec::new() }
    }

    /// Appends a message
    pub fn push(&mut self, field: &'static str, message: String, severity: Severity) {
        self.entries.push(Diagnostic {
            field,
            message,
            severity,
        });
    }

    /// Appends a warning
    pub fn warn(&mut self, field: &'static str, message: String) {
        self.push(field, message, Severity::Warning);
    }

    /// Appends an informative message
    pub fn info(&mut self, field: &'static str, message: String) {
        self.push(field, message, Severity::Info);
    }

    /// Returns all messages in the order they were emitted
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Returns the number of messages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no messages
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if at least one message is a warning
    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Warning)
    }

    /// Returns the first message referring to `field`, if any
    pub fn find(&self, field: &str) -> Option<&Diagnostic> {
        self.entries.iter().find(|d| d.field == field)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.entries {
            let level = match d.severity {
                Severity::Info => "info",
                Severity::Warning => "warning",
            };
            writeln!(f, "[{}] {}: {}", level, d.field, d.message)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
