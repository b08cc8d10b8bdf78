use crate::shared::Result;
use async_trait::async_trait;

/// ChecksumFetcher port for retrieving checksum sibling resources.
///
/// Implementations perform a single attempt with a short timeout; retrying
/// and repeated-failure caching belong to the caller's environment, not to
/// this core.
///
/// # Async Support
/// Checksum verification runs on the bounded resolution pool, so
/// implementations must be `Send + Sync`.
#[async_trait]
pub trait ChecksumFetcher: Send + Sync {
    /// Fetches the body of the checksum resource at the given URL.
    ///
    /// # Errors
    /// Returns an error on any network problem or non-success status. The
    /// caller degrades such failures to the unknown-hash sentinel; they are
    /// never fatal.
    async fn fetch(&self, url: &str) -> Result<String>;
}
