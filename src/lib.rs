//! gradle-resolve - Dependency resolution tool for Gradle projects
//!
//! This library resolves a Gradle project's dependency graph through the
//! tool's own introspection and enriches every external package with the
//! metadata needed for downstream license and vulnerability analysis,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): Pure package model and graph services
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use gradle_resolve::prelude::*;
//! use std::path::PathBuf;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let tooling_connector = GradleToolingConnector::new();
//! let descriptor_source = CachingDescriptorSource::new(MavenLocalRepository::discover());
//! let checksum_fetcher = HttpChecksumClient::new()?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ResolveProjectUseCase::new(
//!     tooling_connector,
//!     descriptor_source,
//!     checksum_fetcher,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = ResolveRequest::new(
//!     PathBuf::from("."),
//!     None,
//!     vec!["test*".to_string()],
//!     HashAlgorithm::Sha1,
//!     Duration::from_secs(600),
//! );
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = JsonFormatter::new();
//! let output = formatter.format(&response.result)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::gradle::GradleToolingConnector;
    pub use crate::adapters::outbound::maven::{CachingDescriptorSource, MavenLocalRepository};
    pub use crate::adapters::outbound::network::HttpChecksumClient;
    pub use crate::application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::{ResolvePackagesUseCase, ResolveProjectUseCase};
    pub use crate::ports::outbound::{
        ChecksumFetcher, DescriptorSource, ModuleDescriptor, OutputPresenter, ProgressReporter,
        RawBuildModel, RawDependency, RawScope, ResultFormatter, SessionOptions, ToolingConnector,
        ToolingOutcome,
    };
    pub use crate::resolution::domain::{
        Hash, HashAlgorithm, Identifier, Issue, Linkage, Package, PackageReference, Project,
        RemoteArtifact, ResolutionMetadata, ResolutionResult, Scope, Severity, VcsInfo,
    };
    pub use crate::resolution::services::{DescriptorIndex, GraphBuilder, ScopeExcludes};
    pub use crate::shared::Result;
}
