use crate::ports::outbound::ChecksumFetcher;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Timeout for a single checksum fetch. Checksum files are tiny; a slow
/// repository should degrade the hash to unknown, not stall the whole run.
const CHECKSUM_TIMEOUT_SECONDS: u64 = 5;

/// HttpChecksumClient adapter for fetching checksum sibling resources.
///
/// This adapter implements the ChecksumFetcher port with a single attempt
/// per URL and a short timeout. There is deliberately no retry loop:
/// repeated-failure handling belongs to the surrounding infrastructure, and
/// a failed fetch only costs an unknown-hash sentinel.
pub struct HttpChecksumClient {
    client: reqwest::Client,
}

impl HttpChecksumClient {
    /// Creates a new checksum client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("gradle-resolve/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(CHECKSUM_TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ChecksumFetcher for HttpChecksumClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Checksum resource returned status code {}",
                response.status()
            );
        }

        Ok(response.text().await?)
    }
}
