use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a single coordinate component (security limit)
const MAX_COMPONENT_LENGTH: usize = 255;

/// Identifier value object naming a package or project.
///
/// An identifier is the 4-tuple (ecosystem, namespace, name, version) and is
/// used both as the node key in dependency trees and as the deduplication key
/// for the final package set. Equality and hashing cover all four fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier {
    /// Ecosystem tag, e.g. "Maven" for external artifacts or "Gradle" for
    /// project modules
    pub ecosystem: String,
    /// Group / organization part of the coordinates (may be empty)
    pub namespace: String,
    /// Artifact or module name
    pub name: String,
    /// Version string (may be empty when the tool reported none)
    pub version: String,
}

impl Identifier {
    pub fn new(
        ecosystem: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            namespace: truncate(namespace.into()),
            name: truncate(name.into()),
            version: truncate(version.into()),
        }
    }

    /// Identifier for an external Maven-layout artifact
    pub fn maven(
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self::new("Maven", namespace, name, version)
    }

    /// Identifier for a project module of the analyzed Gradle build
    pub fn gradle(
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self::new("Gradle", namespace, name, version)
    }

    /// Coordinate string, e.g. "Maven:com.example:lib:1.0"
    pub fn coordinates(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.ecosystem, self.namespace, self.name, self.version
        )
    }
}

/// Coordinates arrive from an external process; cap their length rather than
/// failing the whole resolution on a degenerate value.
fn truncate(mut value: String) -> String {
    if value.len() > MAX_COMPONENT_LENGTH {
        value.truncate(MAX_COMPONENT_LENGTH);
    }
    value
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinates())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_coordinates() {
        let id = Identifier::maven("com.example", "lib", "1.0");
        assert_eq!(id.coordinates(), "Maven:com.example:lib:1.0");
    }

    #[test]
    fn test_identifier_display() {
        let id = Identifier::gradle("", "app", "0.1.0");
        assert_eq!(format!("{}", id), "Gradle::app:0.1.0");
    }

    #[test]
    fn test_identifier_equality_over_all_fields() {
        let a = Identifier::maven("com.example", "lib", "1.0");
        let b = Identifier::maven("com.example", "lib", "1.0");
        let c = Identifier::maven("com.example", "lib", "2.0");
        let d = Identifier::gradle("com.example", "lib", "1.0");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_identifier_usable_as_set_key() {
        let mut set = HashSet::new();
        set.insert(Identifier::maven("com.example", "lib", "1.0"));
        set.insert(Identifier::maven("com.example", "lib", "1.0"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_identifier_ordering_is_stable() {
        let a = Identifier::maven("com.a", "lib", "1.0");
        let b = Identifier::maven("com.b", "lib", "1.0");
        assert!(a < b);
    }

    #[test]
    fn test_overlong_component_is_truncated() {
        let long = "x".repeat(1000);
        let id = Identifier::maven("com.example", long, "1.0");
        assert_eq!(id.name.len(), 255);
    }
}
