use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a recoverable problem encountered during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A recoverable problem recorded during resolution.
///
/// Issues are the data representation of partial failure: everything that
/// degrades the result without aborting it ends up here, appended in the
/// order the pipeline produced it. An empty issue list implies full success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The stage or component that raised the issue
    pub source: String,
    pub message: String,
    pub severity: Severity,
}

impl Issue {
    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.source, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_error() {
        let issue = Issue::error("resolver", "no descriptor found for Maven:com.x:lib:1.0");
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.source, "resolver");
    }

    #[test]
    fn test_issue_warning() {
        let issue = Issue::warning("gradle", "deprecated configuration used");
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::error("resolver", "boom");
        assert_eq!(format!("{}", issue), "ERROR [resolver]: boom");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Error), "ERROR");
        assert_eq!(format!("{}", Severity::Warning), "WARNING");
    }
}
