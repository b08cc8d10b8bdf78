use super::*;
use crate::ports::outbound::{RawBuildModel, RawDependency, RawScope};
use crate::resolution::domain::{HashAlgorithm, Identifier, Linkage, Severity};
use crate::shared::error::ResolveError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Mock implementations for testing

struct MockToolingConnector {
    model: RawBuildModel,
    diagnostics: Vec<String>,
    fail: bool,
}

impl MockToolingConnector {
    fn new(model: RawBuildModel) -> Self {
        Self {
            model,
            diagnostics: Vec::new(),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            model: RawBuildModel::default(),
            diagnostics: Vec::new(),
            fail: true,
        }
    }

    fn with_diagnostics(mut self, diagnostics: Vec<&str>) -> Self {
        self.diagnostics = diagnostics.into_iter().map(String::from).collect();
        self
    }
}

#[async_trait]
impl ToolingConnector for MockToolingConnector {
    async fn open(
        &self,
        project_dir: &Path,
        _options: &SessionOptions,
    ) -> Result<ToolingOutcome> {
        if self.fail {
            return Err(ResolveError::tooling_failure(project_dir, "daemon gone").into());
        }
        Ok(ToolingOutcome {
            model: self.model.clone(),
            diagnostics: self.diagnostics.clone(),
        })
    }
}

struct MockDescriptorSource {
    known: Vec<(Identifier, String)>,
}

impl MockDescriptorSource {
    fn empty() -> Self {
        Self { known: Vec::new() }
    }

    fn with(mut self, id: Identifier, content: &str) -> Self {
        self.known.push((id, content.to_string()));
        self
    }
}

impl DescriptorSource for MockDescriptorSource {
    fn locate(&self, id: &Identifier) -> Option<PathBuf> {
        self.known
            .iter()
            .position(|(known, _)| known == id)
            .map(|position| PathBuf::from(format!("/repo/{}.module", position)))
    }

    fn read(&self, path: &Path) -> Result<String> {
        let position: usize = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .and_then(|stem| stem.parse().ok())
            .ok_or_else(|| anyhow::anyhow!("unknown path"))?;
        Ok(self.known[position].1.clone())
    }
}

struct MockChecksumFetcher;

#[async_trait]
impl ChecksumFetcher for MockChecksumFetcher {
    async fn fetch(&self, _url: &str) -> Result<String> {
        Err(anyhow::anyhow!("offline"))
    }
}

struct MockProgressReporter;

impl ProgressReporter for MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}

fn external(name: &str) -> RawDependency {
    RawDependency {
        group_id: "com.x".to_string(),
        artifact_id: name.to_string(),
        version: "1.0".to_string(),
        ..Default::default()
    }
}

fn request(excluded_scopes: Vec<&str>) -> ResolveRequest {
    ResolveRequest::new(
        PathBuf::from("."),
        None,
        excluded_scopes.into_iter().map(String::from).collect(),
        HashAlgorithm::Sha1,
        Duration::from_secs(60),
    )
}

fn lib_descriptor() -> &'static str {
    r#"{
        "component": {"group": "com.x", "module": "lib", "version": "1.0"},
        "metadata": {"licenses": [{"name": "Apache-2.0"}]}
    }"#
}

#[tokio::test]
async fn test_end_to_end_single_external_dependency() {
    // One project root depending on (Maven, "com.x", "lib", "1.0") under
    // scope "compile" only; scope "test" is empty.
    let model = RawBuildModel {
        group: "com.x".to_string(),
        name: "app".to_string(),
        version: "1.0".to_string(),
        vcs_url: None,
        scopes: vec![
            RawScope {
                name: "compile".to_string(),
                dependencies: vec![external("lib")],
            },
            RawScope {
                name: "test".to_string(),
                dependencies: vec![],
            },
        ],
    };

    let use_case = ResolveProjectUseCase::new(
        MockToolingConnector::new(model),
        MockDescriptorSource::empty().with(Identifier::maven("com.x", "lib", "1.0"), lib_descriptor()),
        MockChecksumFetcher,
        MockProgressReporter,
    );

    // Excluding "test" leaves the result unchanged
    for excluded in [vec![], vec!["test"]] {
        let response = use_case.execute(request(excluded)).await.unwrap();
        let result = &response.result;

        assert_eq!(result.project.id, Identifier::gradle("com.x", "app", "1.0"));
        let compile = result
            .project
            .scopes
            .iter()
            .find(|scope| scope.name == "compile")
            .unwrap();
        assert_eq!(compile.dependencies.len(), 1);
        assert_eq!(compile.dependencies[0].linkage, Linkage::Dynamic);
        assert_eq!(
            compile.dependencies[0].id,
            Identifier::maven("com.x", "lib", "1.0")
        );

        assert_eq!(result.packages.len(), 1);
        let package = result
            .find_package(&Identifier::maven("com.x", "lib", "1.0"))
            .unwrap();
        assert!(package.declared_licenses.contains("Apache-2.0"));
        assert!(!result.has_errors());
    }
}

#[tokio::test]
async fn test_tooling_failure_aborts_with_no_partial_result() {
    let use_case = ResolveProjectUseCase::new(
        MockToolingConnector::failing(),
        MockDescriptorSource::empty(),
        MockChecksumFetcher,
        MockProgressReporter,
    );

    let result = use_case.execute(request(vec![])).await;
    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Gradle invocation failed"));
}

#[tokio::test]
async fn test_session_diagnostics_surface_as_warnings() {
    let model = RawBuildModel {
        name: "app".to_string(),
        ..Default::default()
    };
    let use_case = ResolveProjectUseCase::new(
        MockToolingConnector::new(model).with_diagnostics(vec!["Deprecated Gradle features"]),
        MockDescriptorSource::empty(),
        MockChecksumFetcher,
        MockProgressReporter,
    );

    let response = use_case.execute(request(vec![])).await.unwrap();
    let issues = &response.result.issues;
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].source, "gradle");
    assert!(issues[0].message.contains("Deprecated Gradle features"));
}

#[tokio::test]
async fn test_unresolvable_package_becomes_placeholder_with_error() {
    let model = RawBuildModel {
        name: "app".to_string(),
        scopes: vec![RawScope {
            name: "compile".to_string(),
            dependencies: vec![external("ghost")],
        }],
        ..Default::default()
    };
    let use_case = ResolveProjectUseCase::new(
        MockToolingConnector::new(model),
        MockDescriptorSource::empty(),
        MockChecksumFetcher,
        MockProgressReporter,
    );

    let response = use_case.execute(request(vec![])).await.unwrap();
    let result = &response.result;

    assert_eq!(result.packages.len(), 1);
    assert!(result.packages[0].is_placeholder());
    assert_eq!(result.error_count(), 1);
    assert!(result.issues[0].message.contains("Maven:com.x:ghost:1.0"));
}

#[tokio::test]
async fn test_excluded_scope_identifiers_never_resolved() {
    let model = RawBuildModel {
        name: "app".to_string(),
        scopes: vec![
            RawScope {
                name: "compile".to_string(),
                dependencies: vec![external("kept")],
            },
            RawScope {
                name: "testRuntime".to_string(),
                dependencies: vec![external("dropped")],
            },
        ],
        ..Default::default()
    };
    let use_case = ResolveProjectUseCase::new(
        MockToolingConnector::new(model),
        MockDescriptorSource::empty(),
        MockChecksumFetcher,
        MockProgressReporter,
    );

    let response = use_case
        .execute(request(vec!["test*"]))
        .await
        .unwrap();
    let result = &response.result;

    assert!(result
        .find_package(&Identifier::maven("com.x", "kept", "1.0"))
        .is_some());
    assert!(result
        .find_package(&Identifier::maven("com.x", "dropped", "1.0"))
        .is_none());
}

#[tokio::test]
async fn test_invalid_exclusion_pattern_is_fatal() {
    let use_case = ResolveProjectUseCase::new(
        MockToolingConnector::new(RawBuildModel::default()),
        MockDescriptorSource::empty(),
        MockChecksumFetcher,
        MockProgressReporter,
    );

    let result = use_case.execute(request(vec!["***"])).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_duplicate_identifier_resolved_once() {
    let model = RawBuildModel {
        name: "app".to_string(),
        scopes: vec![RawScope {
            name: "compile".to_string(),
            dependencies: vec![external("lib"), external("lib")],
        }],
        ..Default::default()
    };
    let use_case = ResolveProjectUseCase::new(
        MockToolingConnector::new(model),
        MockDescriptorSource::empty().with(Identifier::maven("com.x", "lib", "1.0"), lib_descriptor()),
        MockChecksumFetcher,
        MockProgressReporter,
    );

    let response = use_case.execute(request(vec![])).await.unwrap();
    assert_eq!(response.result.packages.len(), 1);
    // Both occurrences stay in the scope tree
    assert_eq!(response.result.project.scopes[0].dependencies.len(), 2);
}
