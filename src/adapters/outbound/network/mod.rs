/// Network adapters for checksum retrieval
mod checksum_client;

pub use checksum_client::HttpChecksumClient;
