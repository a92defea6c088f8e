//! Diagnostic types for the generation pipeline.
//!
//! The pipeline filters rather than validates: nothing here ever aborts a
//! run. Diagnostics are an opt-in channel letting hosts see what was skipped
//! and why; ignoring them preserves the original skip-don't-fail behavior.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    /// A fatal error. The built-in pipeline steps never produce one; the
    /// level exists for hosts layering stricter policies on top.
    Error,
    /// Something was skipped or dropped that the author probably meant to
    /// take effect.
    Warning,
    /// Informational message about the generation process.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a pipeline step.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The step that produced this diagnostic ("classify", "emit", ...).
    pub step: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location, usually a fully-qualified class name.
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            step: step.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            step: step.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            step: step.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

/// Accumulator the pipeline steps push into during a run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Iterate over recorded diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Returns true if any warning has been recorded.
    pub fn has_warnings(&self) -> bool {
        self.entries.iter().any(|d| d.severity.is_warning())
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the accumulator, yielding the recorded diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
