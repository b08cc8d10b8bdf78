use crate::resolution::domain::{Identifier, PackageReference};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Named grouping of dependencies for one build configuration
/// (e.g. "compileClasspath", "testRuntimeClasspath").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub name: String,
    /// Root references of this scope, in the order reported by the tool
    pub dependencies: Vec<PackageReference>,
}

impl Scope {
    pub fn new(name: impl Into<String>, dependencies: Vec<PackageReference>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }

    /// All identifiers in this scope's transitive closure.
    pub fn collect_identifiers(&self) -> HashSet<Identifier> {
        let mut identifiers = HashSet::new();
        for root in &self.dependencies {
            root.visit(&mut |node| {
                identifiers.insert(node.id.clone());
            });
        }
        identifiers
    }

    /// True when the given identifier is reachable from any root of this scope.
    pub fn contains(&self, id: &Identifier) -> bool {
        let mut found = false;
        for root in &self.dependencies {
            root.visit(&mut |node| {
                if node.id == *id {
                    found = true;
                }
            });
        }
        found
    }
}
