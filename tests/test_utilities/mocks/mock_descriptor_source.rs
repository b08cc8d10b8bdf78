use gradle_resolve::prelude::*;
use std::path::{Path, PathBuf};

/// Mock DescriptorSource for testing
#[derive(Default)]
pub struct MockDescriptorSource {
    descriptors: Vec<(Identifier, String)>,
}

impl MockDescriptorSource {
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    pub fn with_descriptor(mut self, id: Identifier, content: &str) -> Self {
        self.descriptors.push((id, content.to_string()));
        self
    }
}

impl DescriptorSource for MockDescriptorSource {
    fn locate(&self, id: &Identifier) -> Option<PathBuf> {
        self.descriptors
            .iter()
            .position(|(known, _)| known == id)
            .map(|position| PathBuf::from(format!("/mock-repo/{}.module", position)))
    }

    fn read(&self, path: &Path) -> Result<String> {
        let position: usize = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse().ok())
            .ok_or_else(|| anyhow::anyhow!("Unknown mock descriptor path"))?;
        self.descriptors
            .get(position)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| anyhow::anyhow!("Unknown mock descriptor path"))
    }
}
