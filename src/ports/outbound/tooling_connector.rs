use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default time budget for one dependency-model extraction.
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(600);

/// Options for one tooling session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Gradle version to use instead of the project-declared one. Values are
    /// passed through to the tool unchecked; an unsupported value surfaces as
    /// a tooling failure.
    pub gradle_version: Option<String>,
    /// Wall-clock budget for the blocking model extraction call.
    pub timeout: Duration,
}

impl SessionOptions {
    pub fn new(gradle_version: Option<String>, timeout: Duration) -> Self {
        Self {
            gradle_version,
            timeout,
        }
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            gradle_version: None,
            timeout: DEFAULT_SESSION_TIMEOUT,
        }
    }
}

/// One dependency node as reported by the tool, before canonicalization.
///
/// Every field except the coordinates is optional; trees are built
/// best-effort from whatever data the tool managed to report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDependency {
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
    /// Present when the node is a sibling module of the same build rather
    /// than an external artifact
    #[serde(default)]
    pub local_path: Option<String>,
    /// Remote URL of the module descriptor the tool resolved this node from
    #[serde(default)]
    pub descriptor_url: Option<String>,
    /// Problem the tool itself reported for this node
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<RawDependency>,
}

/// One build configuration with its root dependency nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScope {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<RawDependency>,
}

/// The dependency model of one project directory as serialized by the
/// injected init script. Ephemeral: consumed by one graph-build call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBuildModel {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Repository URL of the build itself, when the tool knows it
    #[serde(default)]
    pub vcs_url: Option<String>,
    #[serde(default)]
    pub scopes: Vec<RawScope>,
}

/// Outcome of a tooling session: the raw model plus whatever the external
/// process printed. Captured output is diagnostic only and must never drive
/// control decisions.
#[derive(Debug, Clone, Default)]
pub struct ToolingOutcome {
    pub model: RawBuildModel,
    pub diagnostics: Vec<String>,
}

/// ToolingConnector port for extracting a raw dependency model.
///
/// One session covers one project directory and is treated as a single
/// blocking operation: the external tool serializes analysis internally, so
/// there is no benefit in opening concurrent sessions against the same
/// directory.
///
/// # Errors
/// Session failures are fatal for the project directory: connection or
/// daemon problems, timeouts, and an unparseable model all surface as
/// `ResolveError::ToolingFailure` / `ToolingTimeout` / `ModelParseError`.
/// Implementations must release every held resource (processes, temp
/// files) on all exit paths, including failure.
#[async_trait]
pub trait ToolingConnector: Send + Sync {
    async fn open(&self, project_dir: &Path, options: &SessionOptions) -> Result<ToolingOutcome>;
}
