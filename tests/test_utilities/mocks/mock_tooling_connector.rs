use async_trait::async_trait;
use gradle_resolve::prelude::*;
use std::path::Path;

/// Mock ToolingConnector for testing
pub struct MockToolingConnector {
    pub model: RawBuildModel,
    pub diagnostics: Vec<String>,
    pub should_fail: bool,
}

impl MockToolingConnector {
    pub fn new(model: RawBuildModel) -> Self {
        Self {
            model,
            diagnostics: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            model: RawBuildModel::default(),
            diagnostics: Vec::new(),
            should_fail: true,
        }
    }

    pub fn with_diagnostic(mut self, line: &str) -> Self {
        self.diagnostics.push(line.to_string());
        self
    }
}

#[async_trait]
impl ToolingConnector for MockToolingConnector {
    async fn open(&self, _project_dir: &Path, _options: &SessionOptions) -> Result<ToolingOutcome> {
        if self.should_fail {
            anyhow::bail!("Mock tooling connector failure");
        }
        Ok(ToolingOutcome {
            model: self.model.clone(),
            diagnostics: self.diagnostics.clone(),
        })
    }
}
