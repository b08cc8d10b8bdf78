use crate::resolution::domain::{Identifier, Issue, Package, Project, Severity};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata stamped onto every resolution result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionMetadata {
    /// RFC 3339 timestamp of when the resolution started
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// Unique id of this resolution run
    pub run_id: String,
}

impl ResolutionMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        run_id: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            run_id,
        }
    }

    /// Generates metadata with the current timestamp and a fresh run id.
    pub fn generate(tool_name: &str, tool_version: &str) -> Self {
        Self::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    /// Generates metadata with this crate's compile-time tool information.
    pub fn generate_default() -> Self {
        Self::generate("gradle-resolve", env!("CARGO_PKG_VERSION"))
    }
}

/// The complete outcome of resolving one project directory.
///
/// The package set is deduplicated by identifier and sorted for stable
/// output; completeness of the result is fully described by the issue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub metadata: ResolutionMetadata,
    pub project: Project,
    pub packages: Vec<Package>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl ResolutionResult {
    pub fn new(
        metadata: ResolutionMetadata,
        project: Project,
        mut packages: Vec<Package>,
        issues: Vec<Issue>,
    ) -> Self {
        // Within one identifier a resolved entry sorts before a placeholder,
        // and dedup keeps the first of each run
        packages.sort_by(|a, b| {
            a.id.cmp(&b.id)
                .then(a.is_placeholder().cmp(&b.is_placeholder()))
        });
        packages.dedup_by(|a, b| a.id == b.id);
        Self {
            metadata,
            project,
            packages,
            issues,
        }
    }

    pub fn find_package(&self, id: &Identifier) -> Option<&Package> {
        self.packages.iter().find(|package| package.id == *id)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
