use async_trait::async_trait;
use gradle_resolve::prelude::*;
use std::collections::HashMap;

/// Mock ChecksumFetcher for testing
#[derive(Default)]
pub struct MockChecksumFetcher {
    pub responses: HashMap<String, String>,
    pub should_fail: bool,
}

impl MockChecksumFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_response(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            responses: HashMap::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ChecksumFetcher for MockChecksumFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock checksum fetcher failure");
        }
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No mock response for {}", url))
    }
}
