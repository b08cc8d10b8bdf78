use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - resolution completed without ERROR issues, or gating disabled
    Success = 0,
    /// Resolution completed but produced ERROR issues and --fail-on-issues is set
    IssuesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (tooling failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IssuesDetected => write!(f, "Issues Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency resolution.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Only `ToolingFailure` aborts a project's resolution; every other failure
/// mode inside the pipeline is recovered locally and represented as data
/// (placeholder packages, issues, unknown-hash sentinels).
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Gradle invocation failed for project: {project_dir}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ToolingFailure {
        project_dir: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Gradle did not finish within {seconds} seconds for project: {project_dir}\n\n💡 Hint: Large builds can exceed the default budget; raise timeout_seconds in gradle-resolve.config.yml")]
    ToolingTimeout { project_dir: PathBuf, seconds: u64 },

    #[error("Failed to parse the dependency model reported by Gradle: {path}\nDetails: {details}\n\n💡 Hint: Make sure the project builds with a supported Gradle version")]
    ModelParseError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid Gradle project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl ResolveError {
    /// Creates a ToolingFailure with the standard daemon hint
    pub fn tooling_failure(project_dir: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        ResolveError::ToolingFailure {
            project_dir: project_dir.into(),
            details: details.into(),
            hint: "Check that the project contains a Gradle wrapper or that 'gradle' is on PATH, \
                   and that the build itself succeeds"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::IssuesDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::IssuesDetected), "Issues Detected (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_equality() {
        assert_eq!(ExitCode::Success, ExitCode::Success);
        assert_ne!(ExitCode::Success, ExitCode::ApplicationError);
    }

    // ResolveError tests
    #[test]
    fn test_tooling_failure_display() {
        let error = ResolveError::tooling_failure(
            PathBuf::from("/test/project"),
            "daemon disappeared unexpectedly",
        );
        let display = format!("{}", error);
        assert!(display.contains("Gradle invocation failed"));
        assert!(display.contains("/test/project"));
        assert!(display.contains("daemon disappeared unexpectedly"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_tooling_timeout_display() {
        let error = ResolveError::ToolingTimeout {
            project_dir: PathBuf::from("/test/project"),
            seconds: 600,
        };
        let display = format!("{}", error);
        assert!(display.contains("did not finish within 600 seconds"));
        assert!(display.contains("/test/project"));
    }

    #[test]
    fn test_model_parse_error_display() {
        let error = ResolveError::ModelParseError {
            path: PathBuf::from("/tmp/model.json"),
            details: "unexpected end of input".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse the dependency model"));
        assert!(display.contains("/tmp/model.json"));
        assert!(display.contains("unexpected end of input"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = ResolveError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("Directory does not exist"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ResolveError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ResolveError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
