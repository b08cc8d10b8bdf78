use crate::ports::outbound::{RawBuildModel, RawDependency};
use crate::resolution::domain::{
    Identifier, Issue, Linkage, PackageReference, Project, Scope, VcsInfo,
};
use crate::resolution::services::ScopeExcludes;
use std::collections::BTreeMap;

/// Read-only lookup table from external identifier to the remote URL of its
/// module descriptor. Built once per resolution, then consumed concurrently.
///
/// Every external identifier reachable from a non-excluded scope has an
/// entry; the URL is `None` for nodes the tool reported without a descriptor
/// reference. The first descriptor location seen for an identifier wins.
pub type DescriptorIndex = BTreeMap<Identifier, Option<String>>;

/// Everything the graph builder produces from one raw model.
#[derive(Debug)]
pub struct GraphBuildOutcome {
    pub project: Project,
    pub descriptor_index: DescriptorIndex,
    pub issues: Vec<Issue>,
}

/// GraphBuilder service converting the raw tool model into the canonical
/// project/scope/reference graph.
///
/// This is pure transformation logic with no I/O. Scope exclusion is applied
/// before traversal, so excluded subtrees are never visited and contribute
/// nothing to the descriptor index. No missing field is fatal; trees are
/// built best-effort from whatever the tool reported.
pub struct GraphBuilder;

/// Issue source tag for problems found while building the graph
const SOURCE: &str = "graph";

impl GraphBuilder {
    pub fn build(model: &RawBuildModel, excludes: &ScopeExcludes) -> GraphBuildOutcome {
        let mut index = DescriptorIndex::new();
        let mut issues = Vec::new();
        let mut scopes = Vec::new();

        for raw_scope in &model.scopes {
            if excludes.is_excluded(&raw_scope.name) {
                continue;
            }

            let mut ancestry = Vec::new();
            let roots = raw_scope
                .dependencies
                .iter()
                .map(|node| Self::convert_node(node, &mut ancestry, &mut index, &mut issues))
                .collect();
            scopes.push(Scope::new(raw_scope.name.clone(), roots));
        }

        let project = Project::new(
            Identifier::gradle(model.group.clone(), model.name.clone(), model.version.clone()),
            model
                .vcs_url
                .as_deref()
                .map(VcsInfo::from_url)
                .unwrap_or_default(),
            scopes,
        );

        GraphBuildOutcome {
            project,
            descriptor_index: index,
            issues,
        }
    }

    /// Converts one raw node and its subtree, preserving structure.
    ///
    /// `ancestry` holds the identifiers on the path from the scope root to
    /// this node. The external tool is not supposed to report cyclic trees,
    /// but a malformed model must not recurse unboundedly: a node whose
    /// identifier is already an ancestor is emitted without children and
    /// recorded as a warning.
    fn convert_node(
        raw: &RawDependency,
        ancestry: &mut Vec<Identifier>,
        index: &mut DescriptorIndex,
        issues: &mut Vec<Issue>,
    ) -> PackageReference {
        let (id, linkage) = if raw.local_path.is_some() {
            (
                Identifier::gradle(
                    raw.group_id.clone(),
                    raw.artifact_id.clone(),
                    raw.version.clone(),
                ),
                Linkage::ProjectDynamic,
            )
        } else {
            (
                Identifier::maven(
                    raw.group_id.clone(),
                    raw.artifact_id.clone(),
                    raw.version.clone(),
                ),
                Linkage::Dynamic,
            )
        };

        if let Some(error) = &raw.error {
            issues.push(Issue::error(SOURCE, format!("{}: {}", id, error)));
        }
        if let Some(warning) = &raw.warning {
            issues.push(Issue::warning(SOURCE, format!("{}: {}", id, warning)));
        }

        // Only external artifacts take part in metadata resolution. The entry
        // is created even without a descriptor reference so that the package
        // set covers every reachable identifier; the first seen location wins.
        if linkage == Linkage::Dynamic {
            let entry = index.entry(id.clone()).or_insert(None);
            if entry.is_none() && raw.descriptor_url.is_some() {
                entry.clone_from(&raw.descriptor_url);
            }
        }

        if ancestry.contains(&id) {
            issues.push(Issue::warning(
                SOURCE,
                format!("Dependency cycle detected at {}; breaking the cycle here", id),
            ));
            return PackageReference::new(id, linkage);
        }

        ancestry.push(id.clone());
        let dependencies = raw
            .dependencies
            .iter()
            .map(|child| Self::convert_node(child, ancestry, index, issues))
            .collect();
        ancestry.pop();

        PackageReference::with_dependencies(id, linkage, dependencies)
    }
}
