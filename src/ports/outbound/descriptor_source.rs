use crate::resolution::domain::Identifier;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Coordinates of a descriptor's component or parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorCoordinates {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub version: String,
}

/// License entry of a module descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorLicense {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Source-control section of a module descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorScm {
    /// Browsable repository URL, preferred for VCS info
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Non-structural metadata of a module descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorMetadata {
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<DescriptorLicense>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scm: Option<DescriptorScm>,
}

/// A module descriptor as stored in the artifact cache.
///
/// This is the Gradle Module Metadata document published next to the jar in
/// Maven-layout repositories, with the publication metadata section this tool
/// extracts from. A descriptor may name a parent whose values it inherits;
/// building the effective model is the resolver's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    #[serde(default)]
    pub format_version: String,
    #[serde(default)]
    pub component: DescriptorCoordinates,
    #[serde(default)]
    pub parent: Option<DescriptorCoordinates>,
    #[serde(default)]
    pub metadata: DescriptorMetadata,
}

impl ModuleDescriptor {
    /// Parses a descriptor document.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid module descriptor: {}", e))
    }

    pub fn parent_identifier(&self) -> Option<Identifier> {
        self.parent.as_ref().map(|parent| {
            Identifier::maven(
                parent.group.clone(),
                parent.module.clone(),
                parent.version.clone(),
            )
        })
    }
}

/// DescriptorSource port for locating and reading module descriptors.
///
/// This port abstracts the local artifact cache (a Maven-layout repository on
/// disk). Locating is infallible by design: a missing descriptor is an
/// expected per-package condition, not an error.
pub trait DescriptorSource: Send + Sync {
    /// Returns the path of the descriptor for the identifier, if the cache
    /// holds one.
    fn locate(&self, id: &Identifier) -> Option<PathBuf>;

    /// Reads a previously located descriptor file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails safety checks.
    fn read(&self, path: &Path) -> Result<String>;
}
