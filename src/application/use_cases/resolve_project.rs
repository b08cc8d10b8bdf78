use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::application::use_cases::ResolvePackagesUseCase;
use crate::ports::outbound::{
    ChecksumFetcher, DescriptorSource, ProgressReporter, SessionOptions, ToolingConnector,
    ToolingOutcome,
};
use crate::resolution::domain::{Issue, ResolutionMetadata, ResolutionResult};
use crate::resolution::services::{GraphBuildOutcome, GraphBuilder, ScopeExcludes};
use crate::shared::Result;

/// ResolveProjectUseCase - Core use case for dependency resolution
///
/// This use case orchestrates the full pipeline using generic dependency
/// injection for all infrastructure dependencies: open the tooling session,
/// build the canonical graph, resolve package metadata, and merge every
/// stage's issues into the final result.
///
/// Only a tooling failure aborts the pipeline. Every later stage degrades to
/// issues and placeholder data, so a caller observes either a fatal error
/// with nothing returned or a best-effort result whose completeness is fully
/// described by its issue list.
///
/// # Type Parameters
/// * `TC` - ToolingConnector implementation
/// * `DS` - DescriptorSource implementation
/// * `CF` - ChecksumFetcher implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveProjectUseCase<TC, DS, CF, PR> {
    tooling_connector: TC,
    descriptor_source: DS,
    checksum_fetcher: CF,
    progress_reporter: PR,
}

impl<TC, DS, CF, PR> ResolveProjectUseCase<TC, DS, CF, PR>
where
    TC: ToolingConnector,
    DS: DescriptorSource,
    CF: ChecksumFetcher,
    PR: ProgressReporter,
{
    /// Creates a new ResolveProjectUseCase with injected dependencies
    pub fn new(
        tooling_connector: TC,
        descriptor_source: DS,
        checksum_fetcher: CF,
        progress_reporter: PR,
    ) -> Self {
        Self {
            tooling_connector,
            descriptor_source,
            checksum_fetcher,
            progress_reporter,
        }
    }

    /// Executes the resolution use case
    ///
    /// # Arguments
    /// * `request` - Resolution request containing the project directory and options
    ///
    /// # Returns
    /// ResolveResponse containing the project, package set and issue list
    ///
    /// # Errors
    /// Returns an error only for failures that abort the whole directory:
    /// a tooling failure or invalid exclusion patterns.
    pub async fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let metadata = ResolutionMetadata::generate_default();

        // Step 1: Extract the raw model through one tooling session
        let outcome = self.open_session(&request).await?;

        // Step 2: Canonicalize into scopes and the descriptor index
        let excludes = ScopeExcludes::new(request.excluded_scopes.clone())?;
        let mut graph = self.build_graph(&outcome, &excludes);

        // Step 3: Session diagnostics surface as warnings, graph issues as-is
        let mut issues: Vec<Issue> = outcome
            .diagnostics
            .iter()
            .map(|line| Issue::warning("gradle", line))
            .collect();
        issues.append(&mut graph.issues);

        // Step 4: Resolve metadata for every external identifier
        let (packages, package_issues) = self.resolve_packages(&request, &graph).await;
        issues.extend(package_issues);

        let result = ResolutionResult::new(metadata, graph.project, packages, issues);
        self.progress_reporter.report_completion(&format!(
            "✅ Resolution complete: {} package(s), {} error(s), {} warning(s)",
            result.packages.len(),
            result.error_count(),
            result.warning_count()
        ));

        Ok(ResolveResponse::new(result))
    }

    /// Opens the tooling session and reports what came back
    async fn open_session(&self, request: &ResolveRequest) -> Result<ToolingOutcome> {
        self.progress_reporter.report(&format!(
            "🐘 Extracting the dependency model from: {}",
            request.project_dir.display()
        ));

        let options = SessionOptions::new(request.gradle_version.clone(), request.timeout);
        let outcome = self
            .tooling_connector
            .open(&request.project_dir, &options)
            .await?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} scope(s) in project '{}'",
            outcome.model.scopes.len(),
            outcome.model.name
        ));

        Ok(outcome)
    }

    /// Builds the canonical graph and warns about ineffective exclusions
    fn build_graph(&self, outcome: &ToolingOutcome, excludes: &ScopeExcludes) -> GraphBuildOutcome {
        let graph = GraphBuilder::build(&outcome.model, excludes);

        for pattern in excludes.unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Scope exclusion pattern '{}' did not match any scope.",
                pattern
            ));
        }

        self.progress_reporter.report(&format!(
            "📦 {} external identifier(s) to resolve",
            graph.descriptor_index.len()
        ));

        graph
    }

    /// Runs the per-identifier metadata resolution
    async fn resolve_packages(
        &self,
        request: &ResolveRequest,
        graph: &GraphBuildOutcome,
    ) -> (Vec<crate::resolution::domain::Package>, Vec<Issue>) {
        if graph.descriptor_index.is_empty() {
            return (Vec::new(), Vec::new());
        }

        self.progress_reporter
            .report("🔍 Resolving package metadata...");

        let resolver = ResolvePackagesUseCase::new(
            &self.descriptor_source,
            &self.checksum_fetcher,
            &self.progress_reporter,
            request.checksum_algorithm,
        );
        resolver.resolve_all(&graph.descriptor_index).await
    }
}

#[cfg(test)]
mod tests;
