pub mod caching_source;
pub mod local_repository;

pub use caching_source::CachingDescriptorSource;
pub use local_repository::MavenLocalRepository;
