use crate::resolution::domain::Identifier;
use serde::{Deserialize, Serialize};

/// Relationship of a dependency to its consumer's build output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Linkage {
    /// Project module linked statically
    ProjectStatic,
    /// Project module linked dynamically (the Gradle default for siblings)
    ProjectDynamic,
    /// External artifact linked statically
    Static,
    /// External artifact linked dynamically (the Gradle default)
    Dynamic,
}

/// A node in a scope's dependency tree.
///
/// References form an explicit owned-child tree per scope root. The same
/// identifier may legitimately appear in multiple branches; trees are not
/// collapsed into a DAG because the path to a dependency is meaningful for
/// downstream analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReference {
    pub id: Identifier,
    pub linkage: Linkage,
    /// Direct dependencies of this node, in the order reported by the tool
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<PackageReference>,
}

impl PackageReference {
    pub fn new(id: Identifier, linkage: Linkage) -> Self {
        Self {
            id,
            linkage,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies(
        id: Identifier,
        linkage: Linkage,
        dependencies: Vec<PackageReference>,
    ) -> Self {
        Self {
            id,
            linkage,
            dependencies,
        }
    }

    /// Visits this node and every transitive dependency in depth-first order.
    pub fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a PackageReference)) {
        visitor(self);
        for dependency in &self.dependencies {
            dependency.visit(visitor);
        }
    }

    /// Number of nodes in this subtree, the root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }
}
