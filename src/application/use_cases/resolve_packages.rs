use crate::ports::outbound::{
    ChecksumFetcher, DescriptorMetadata, DescriptorSource, ModuleDescriptor, ProgressReporter,
};
use crate::resolution::domain::{
    Hash, HashAlgorithm, Identifier, Issue, Package, RemoteArtifact, VcsInfo,
};
use crate::resolution::services::DescriptorIndex;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Issue source tag for metadata resolution problems
const SOURCE: &str = "resolver";

/// Upper bound on parent-chain traversal. Real inheritance chains are short;
/// anything deeper is treated as degenerate input.
const MAX_PARENT_DEPTH: usize = 10;

/// ResolvePackagesUseCase - Resolves metadata for every external identifier
///
/// For each identifier the use case locates and parses the module descriptor
/// from the local artifact cache, builds the inheritance-merged effective
/// model, extracts authors/licenses/VCS/homepage, derives the binary and
/// source artifact locations, and verifies them against their checksum
/// sibling resources.
///
/// Identifiers are independent, so the work fans out on a bounded pool sized
/// from the available concurrency. Each worker accumulates its own issue
/// buffer; buffers are merged after all workers complete, ordered by
/// identifier so that results are deterministic regardless of completion
/// order. Failures here never propagate: they degrade to placeholder
/// packages, ERROR issues, or unknown-hash sentinels.
///
/// # Type Parameters
/// * `DS` - DescriptorSource implementation
/// * `CF` - ChecksumFetcher implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolvePackagesUseCase<'a, DS, CF, PR> {
    descriptor_source: &'a DS,
    checksum_fetcher: &'a CF,
    progress_reporter: &'a PR,
    algorithm: HashAlgorithm,
}

impl<'a, DS, CF, PR> ResolvePackagesUseCase<'a, DS, CF, PR>
where
    DS: DescriptorSource,
    CF: ChecksumFetcher,
    PR: ProgressReporter,
{
    pub fn new(
        descriptor_source: &'a DS,
        checksum_fetcher: &'a CF,
        progress_reporter: &'a PR,
        algorithm: HashAlgorithm,
    ) -> Self {
        Self {
            descriptor_source,
            checksum_fetcher,
            progress_reporter,
            algorithm,
        }
    }

    /// Resolves every identifier of the index.
    ///
    /// Returns the package set (one entry per identifier, placeholder or
    /// resolved) and the merged issue buffers.
    pub async fn resolve_all(&self, index: &DescriptorIndex) -> (Vec<Package>, Vec<Issue>) {
        let total = index.len();
        let completed = AtomicUsize::new(0);
        let completed_ref = &completed;

        let mut results: Vec<(Package, Vec<Issue>)> = stream::iter(index.iter())
            .map(|(id, location)| async move {
                let outcome = self.resolve_one(id, location.as_deref()).await;
                let done = completed_ref.fetch_add(1, Ordering::Relaxed) + 1;
                self.progress_reporter
                    .report_progress(done, total, Some(&id.coordinates()));
                outcome
            })
            .buffer_unordered(Self::max_concurrent())
            .collect()
            .await;

        // Completion order is nondeterministic; identifier order is not
        results.sort_by(|(a, _), (b, _)| a.id.cmp(&b.id));

        let mut packages = Vec::with_capacity(results.len());
        let mut issues = Vec::new();
        for (package, package_issues) in results {
            packages.push(package);
            issues.extend(package_issues);
        }
        (packages, issues)
    }

    /// Pool size for descriptor and checksum I/O, proportional to the
    /// available concurrency rather than the identifier count.
    fn max_concurrent() -> usize {
        std::thread::available_parallelism()
            .map(|cores| cores.get() * 2)
            .unwrap_or(8)
    }

    /// Resolves one identifier to a package, degrading to a placeholder on
    /// descriptor problems.
    pub async fn resolve_one(
        &self,
        id: &Identifier,
        descriptor_url: Option<&str>,
    ) -> (Package, Vec<Issue>) {
        let mut issues = Vec::new();

        let descriptor = match self.effective_descriptor(id, &mut issues) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                issues.push(Issue::error(
                    SOURCE,
                    format!("Failed to resolve metadata for {}: {}", id, e),
                ));
                return (Package::placeholder(id.clone()), issues);
            }
        };

        let mut package = Package::placeholder(id.clone());
        package.authors = descriptor
            .metadata
            .authors
            .iter()
            .filter(|author| !author.is_empty())
            .cloned()
            .collect();
        package.declared_licenses = descriptor
            .metadata
            .licenses
            .iter()
            .map(|license| license.name.clone())
            .filter(|name| !name.is_empty())
            .collect();
        package.description = descriptor.metadata.description.clone().unwrap_or_default();
        package.homepage_url = descriptor.metadata.homepage.clone().unwrap_or_default();
        package.vcs = Self::vcs_from_metadata(&descriptor.metadata);

        if let Some(url) = descriptor_url {
            let binary_url = Self::binary_artifact_url(url);
            let source_url = Self::source_artifact_url(&binary_url);
            let binary_hash = self.verify(&binary_url).await;
            let source_hash = self.verify(&source_url).await;
            package.binary_artifact = RemoteArtifact::new(binary_url, binary_hash);
            package.source_artifact = RemoteArtifact::new(source_url, source_hash);
        }

        (package, issues)
    }

    /// Locates, reads and parses the descriptor for one identifier.
    fn load_descriptor(&self, id: &Identifier) -> Result<ModuleDescriptor> {
        let path = self
            .descriptor_source
            .locate(id)
            .ok_or_else(|| anyhow::anyhow!("no descriptor found in the local artifact cache"))?;
        let content = self.descriptor_source.read(&path)?;
        ModuleDescriptor::parse(&content)
    }

    /// Builds the inheritance-merged effective descriptor.
    ///
    /// The identifier's own descriptor must load; problems along the parent
    /// chain only degrade the merge and are recorded as warnings.
    fn effective_descriptor(
        &self,
        id: &Identifier,
        issues: &mut Vec<Issue>,
    ) -> Result<ModuleDescriptor> {
        let mut descriptor = self.load_descriptor(id)?;

        let mut visited: HashSet<Identifier> = HashSet::from([id.clone()]);
        let mut next_parent = descriptor.parent_identifier();
        let mut depth = 0;

        while let Some(parent_id) = next_parent {
            if depth >= MAX_PARENT_DEPTH {
                issues.push(Issue::warning(
                    SOURCE,
                    format!(
                        "Parent chain of {} exceeds {} levels; ignoring the rest",
                        id, MAX_PARENT_DEPTH
                    ),
                ));
                break;
            }
            if !visited.insert(parent_id.clone()) {
                issues.push(Issue::warning(
                    SOURCE,
                    format!("Parent chain of {} is cyclic at {}", id, parent_id),
                ));
                break;
            }

            match self.load_descriptor(&parent_id) {
                Ok(parent) => {
                    next_parent = parent.parent_identifier();
                    Self::merge_parent(&mut descriptor, &parent);
                }
                Err(e) => {
                    issues.push(Issue::warning(
                        SOURCE,
                        format!(
                            "Parent descriptor {} of {} unavailable: {}",
                            parent_id, id, e
                        ),
                    ));
                    break;
                }
            }
            depth += 1;
        }

        Ok(descriptor)
    }

    /// Maven-style inheritance: a child section wins outright, an absent one
    /// is taken from the parent.
    fn merge_parent(child: &mut ModuleDescriptor, parent: &ModuleDescriptor) {
        let child_meta = &mut child.metadata;
        let parent_meta = &parent.metadata;
        if child_meta.authors.is_empty() {
            child_meta.authors = parent_meta.authors.clone();
        }
        if child_meta.licenses.is_empty() {
            child_meta.licenses = parent_meta.licenses.clone();
        }
        if child_meta.homepage.is_none() {
            child_meta.homepage = parent_meta.homepage.clone();
        }
        if child_meta.description.is_none() {
            child_meta.description = parent_meta.description.clone();
        }
        if child_meta.scm.is_none() {
            child_meta.scm = parent_meta.scm.clone();
        }
    }

    /// VCS preference order: browsable SCM URL, then homepage, else empty.
    fn vcs_from_metadata(metadata: &DescriptorMetadata) -> VcsInfo {
        if let Some(url) = metadata.scm.as_ref().and_then(|scm| scm.url.as_deref()) {
            if !url.is_empty() {
                return VcsInfo::from_url(url);
            }
        }
        match metadata.homepage.as_deref() {
            Some(homepage) if !homepage.is_empty() => VcsInfo::from_url(homepage),
            _ => VcsInfo::default(),
        }
    }

    /// Binary artifact location: the descriptor location with the extension
    /// swapped to the binary packaging extension. A pure string transform,
    /// not a repository lookup.
    fn binary_artifact_url(descriptor_url: &str) -> String {
        match descriptor_url.rsplit_once('.') {
            Some((stem, _extension)) => format!("{}.jar", stem),
            None => format!("{}.jar", descriptor_url),
        }
    }

    /// Source artifact location: the binary location with the sources marker
    /// inserted before the extension.
    fn source_artifact_url(binary_url: &str) -> String {
        match binary_url.rsplit_once('.') {
            Some((stem, extension)) => format!("{}-sources.{}", stem, extension),
            None => format!("{}-sources", binary_url),
        }
    }

    /// Fetches and parses the checksum sibling resource of an artifact.
    /// Single attempt; any failure degrades to the unknown sentinel.
    async fn verify(&self, artifact_url: &str) -> Hash {
        let checksum_url = format!("{}.{}", artifact_url, self.algorithm.extension());
        match self.checksum_fetcher.fetch(&checksum_url).await {
            Ok(body) => Hash::from_checksum_response(&body, self.algorithm),
            Err(_) => Hash::unknown(),
        }
    }
}
