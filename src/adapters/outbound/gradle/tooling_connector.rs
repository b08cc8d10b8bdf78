use crate::adapters::outbound::gradle::init_script::InitScript;
use crate::ports::outbound::{RawBuildModel, SessionOptions, ToolingConnector, ToolingOutcome};
use crate::shared::error::ResolveError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Upper bound on captured output lines kept as diagnostics
const MAX_DIAGNOSTIC_LINES: usize = 100;

/// How much of stderr to quote in a failure message
const MAX_FAILURE_DETAIL_CHARS: usize = 2000;

/// GradleToolingConnector adapter extracting the dependency model by running
/// Gradle itself.
///
/// One `open` call is one blocking tool invocation: the init script is
/// written to a temporary file, Gradle runs the cheap `help` task with the
/// script injected, and the script serializes the model to a second
/// temporary file which is read back afterwards. Both temporary artifacts
/// are removed on every exit path; a failed removal degrades to a
/// diagnostic, never an error.
///
/// Process output is captured for diagnostics only. Control decisions are
/// made exclusively from the exit status and the model file.
pub struct GradleToolingConnector;

impl GradleToolingConnector {
    pub fn new() -> Self {
        Self
    }

    /// Picks the Gradle executable for a session.
    ///
    /// Without an override the project-declared toolchain wins: the
    /// project's wrapper script if present, the plain `gradle` on PATH
    /// otherwise. A version override selects a version-suffixed executable
    /// and is passed through unchecked; a missing installation surfaces as a
    /// tooling failure at spawn time.
    fn executable(project_dir: &Path, options: &SessionOptions) -> PathBuf {
        if let Some(version) = &options.gradle_version {
            return PathBuf::from(format!("gradle-{}", version));
        }
        let wrapper = project_dir.join("gradlew");
        if wrapper.is_file() {
            wrapper
        } else {
            PathBuf::from("gradle")
        }
    }

    /// Merges captured stdout and stderr into diagnostic lines.
    fn collect_diagnostics(stdout: &[u8], stderr: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(stdout)
            .lines()
            .chain(String::from_utf8_lossy(stderr).lines())
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .take(MAX_DIAGNOSTIC_LINES)
            .map(String::from)
            .collect()
    }

    fn failure_detail(stderr: &[u8]) -> String {
        let mut detail = String::from_utf8_lossy(stderr).trim().to_string();
        if detail.is_empty() {
            detail = "Gradle produced no error output".to_string();
        }
        if detail.len() > MAX_FAILURE_DETAIL_CHARS {
            detail.truncate(MAX_FAILURE_DETAIL_CHARS);
            detail.push_str(" [...]");
        }
        detail
    }
}

impl Default for GradleToolingConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolingConnector for GradleToolingConnector {
    async fn open(&self, project_dir: &Path, options: &SessionOptions) -> Result<ToolingOutcome> {
        let init_script = InitScript::write()?;
        let model_path = tempfile::Builder::new()
            .prefix("gradle-resolve-model-")
            .suffix(".json")
            .tempfile()
            .map_err(|e| anyhow::anyhow!("Failed to create model output file: {}", e))?
            .into_temp_path();

        let executable = Self::executable(project_dir, options);
        let mut command = Command::new(&executable);
        command
            .current_dir(project_dir)
            .arg("--init-script")
            .arg(init_script.path())
            .arg(format!(
                "-DgradleResolve.outputFile={}",
                model_path.display()
            ))
            .arg("--console=plain")
            .arg("help")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // A timed-out invocation must not leave a Gradle process behind
            .kill_on_drop(true);

        let child = command.spawn().map_err(|e| {
            ResolveError::tooling_failure(
                project_dir,
                format!("failed to launch '{}': {}", executable.display(), e),
            )
        })?;

        let output = match tokio::time::timeout(options.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(ResolveError::tooling_failure(
                    project_dir,
                    format!("failed waiting for Gradle: {}", e),
                )
                .into());
            }
            Err(_) => {
                return Err(ResolveError::ToolingTimeout {
                    project_dir: project_dir.to_path_buf(),
                    seconds: options.timeout.as_secs(),
                }
                .into());
            }
        };

        if !output.status.success() {
            return Err(ResolveError::tooling_failure(
                project_dir,
                format!(
                    "Gradle exited with {}: {}",
                    output.status,
                    Self::failure_detail(&output.stderr)
                ),
            )
            .into());
        }

        let mut diagnostics = Self::collect_diagnostics(&output.stdout, &output.stderr);

        let model_text =
            std::fs::read_to_string(&model_path).map_err(|e| ResolveError::ModelParseError {
                path: model_path.to_path_buf(),
                details: format!("the init script produced no model file: {}", e),
            })?;
        let model: RawBuildModel =
            serde_json::from_str(&model_text).map_err(|e| ResolveError::ModelParseError {
                path: model_path.to_path_buf(),
                details: e.to_string(),
            })?;

        if let Some(warning) = init_script.cleanup() {
            diagnostics.push(warning);
        }
        if let Err(e) = model_path.close() {
            diagnostics.push(format!("Could not delete temporary model file: {}", e));
        }

        Ok(ToolingOutcome { model, diagnostics })
    }
}
