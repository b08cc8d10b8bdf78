use crate::ports::outbound::DescriptorSource;
use crate::resolution::domain::Identifier;
use crate::shared::Result;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CachingDescriptorSource wraps a DescriptorSource and adds in-memory caching.
///
/// This adapter implements the decorator pattern to add caching capability to
/// any DescriptorSource implementation. Parent descriptors sit at the top of
/// many inheritance chains and would otherwise be read once per child while
/// the resolution pool fans out; the cache is thread-safe and shared across
/// workers.
pub struct CachingDescriptorSource<S: DescriptorSource> {
    inner: S,
    located: Arc<DashMap<Identifier, Option<PathBuf>>>,
    contents: Arc<DashMap<PathBuf, String>>,
}

impl<S: DescriptorSource> CachingDescriptorSource<S> {
    /// Creates a new caching source wrapping the given inner source
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            located: Arc::new(DashMap::new()),
            contents: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current content-cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cached_reads(&self) -> usize {
        self.contents.len()
    }
}

impl<S: DescriptorSource> DescriptorSource for CachingDescriptorSource<S> {
    fn locate(&self, id: &Identifier) -> Option<PathBuf> {
        if let Some(cached) = self.located.get(id) {
            return cached.clone();
        }

        let result = self.inner.locate(id);
        self.located.insert(id.clone(), result.clone());
        result
    }

    fn read(&self, path: &Path) -> Result<String> {
        if let Some(cached) = self.contents.get(path) {
            return Ok(cached.clone());
        }

        // Read failures are not cached; a transient error should not poison
        // every later lookup of the same parent
        let content = self.inner.read(path)?;
        self.contents.insert(path.to_path_buf(), content.clone());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock source for testing that tracks call counts
    struct CountingSource {
        reads: AtomicUsize,
        locates: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                reads: AtomicUsize::new(0),
                locates: AtomicUsize::new(0),
            }
        }
    }

    impl DescriptorSource for CountingSource {
        fn locate(&self, id: &Identifier) -> Option<PathBuf> {
            self.locates.fetch_add(1, Ordering::SeqCst);
            (id.name == "present").then(|| PathBuf::from("/repo/present-1.0.module"))
        }

        fn read(&self, _path: &Path) -> Result<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok("{}".to_string())
        }
    }

    #[test]
    fn test_locate_hits_inner_once() {
        let source = CachingDescriptorSource::new(CountingSource::new());
        let id = Identifier::maven("com.example", "present", "1.0");

        assert!(source.locate(&id).is_some());
        assert!(source.locate(&id).is_some());
        assert_eq!(source.inner.locates.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_negative_locate_result_is_cached_too() {
        let source = CachingDescriptorSource::new(CountingSource::new());
        let id = Identifier::maven("com.example", "absent", "1.0");

        assert!(source.locate(&id).is_none());
        assert!(source.locate(&id).is_none());
        assert_eq!(source.inner.locates.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_read_hits_inner_once() {
        let source = CachingDescriptorSource::new(CountingSource::new());
        let path = PathBuf::from("/repo/present-1.0.module");

        source.read(&path).unwrap();
        source.read(&path).unwrap();
        assert_eq!(source.inner.reads.load(Ordering::SeqCst), 1);
        assert_eq!(source.cached_reads(), 1);
    }
}
