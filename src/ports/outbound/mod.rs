/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (the Gradle process, the artifact
/// cache, the network, console, file system).
pub mod checksum_fetcher;
pub mod descriptor_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod result_formatter;
pub mod tooling_connector;

pub use checksum_fetcher::ChecksumFetcher;
pub use descriptor_source::{
    DescriptorCoordinates, DescriptorLicense, DescriptorMetadata, DescriptorScm, DescriptorSource,
    ModuleDescriptor,
};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use result_formatter::ResultFormatter;
pub use tooling_connector::{
    RawBuildModel, RawDependency, RawScope, SessionOptions, ToolingConnector, ToolingOutcome,
    DEFAULT_SESSION_TIMEOUT,
};
