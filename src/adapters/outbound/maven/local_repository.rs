use crate::ports::outbound::DescriptorSource;
use crate::resolution::domain::Identifier;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Descriptor file extension in Maven-layout repositories
const DESCRIPTOR_EXTENSION: &str = "module";

/// MavenLocalRepository adapter for the on-disk artifact cache.
///
/// This adapter implements the DescriptorSource port over the standard
/// Maven repository layout: descriptors live at
/// `<root>/<group as path>/<name>/<version>/<name>-<version>.module`.
/// The default root is `~/.m2/repository`, overridable for builds that
/// relocate their cache.
pub struct MavenLocalRepository {
    root: PathBuf,
}

impl MavenLocalRepository {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Repository at the conventional per-user location.
    pub fn discover() -> Self {
        let root = std::env::var_os("MAVEN_REPO_LOCAL")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".m2/repository"))
            })
            .unwrap_or_else(|| PathBuf::from(".m2/repository"));
        Self::new(root)
    }

    fn descriptor_path(&self, id: &Identifier) -> PathBuf {
        let mut path = self.root.clone();
        for segment in id.namespace.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(&id.name);
        path.push(&id.version);
        path.push(format!(
            "{}-{}.{}",
            id.name, id.version, DESCRIPTOR_EXTENSION
        ));
        path
    }
}

impl DescriptorSource for MavenLocalRepository {
    fn locate(&self, id: &Identifier) -> Option<PathBuf> {
        if id.name.is_empty() || id.version.is_empty() {
            return None;
        }
        let path = self.descriptor_path(id);
        path.is_file().then_some(path)
    }

    fn read(&self, path: &Path) -> Result<String> {
        safe_read_to_string(path, "module descriptor")
    }
}
