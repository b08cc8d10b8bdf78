/// Mock implementations for testing
mod mock_checksum_fetcher;
mod mock_descriptor_source;
mod mock_progress_reporter;
mod mock_tooling_connector;

pub use mock_checksum_fetcher::MockChecksumFetcher;
pub use mock_descriptor_source::MockDescriptorSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_tooling_connector::MockToolingConnector;
