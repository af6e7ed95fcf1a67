use std::sync::{Arc, Mutex, PoisonError};

use crate::error::DashboardError;
use super::{BoundaryCollection, BoundarySource};

/// Process-wide memo of the boundary collection.
///
/// The first successful fetch is kept for the life of the process. Failures
/// are not cached, so the next map visit tries again. The lock is held across
/// the fetch so concurrent first visits share one network call.
pub struct BoundaryCache {
    source: Box<dyn BoundarySource>,
    loaded: Mutex<Option<Arc<BoundaryCollection>>>,
}

impl BoundaryCache {
    pub fn new(source: impl BoundarySource + 'static) -> Self {
        Self { source: Box::new(source), loaded: Mutex::new(None) }
    }

    /// Cache seeded with an already-loaded collection; the source is never called.
    pub fn preloaded(source: impl BoundarySource + 'static, collection: BoundaryCollection) -> Self {
        Self { source: Box::new(source), loaded: Mutex::new(Some(Arc::new(collection))) }
    }

    /// The cached collection, fetching it on first use.
    pub fn get(&self) -> Result<Arc<BoundaryCollection>, DashboardError> {
        let mut loaded = self.loaded.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(collection) = loaded.as_ref() {
            tracing::debug!(source = self.source.location(), "[boundary] cache hit");
            return Ok(Arc::clone(collection));
        }

        let collection = Arc::new(self.source.fetch()?);
        *loaded = Some(Arc::clone(&collection));
        Ok(collection)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::boundary::Boundary;

    struct CountingSource {
        calls: Arc<AtomicUsize>,
        fail_first: usize,
    }

    impl BoundarySource for CountingSource {
        fn fetch(&self) -> Result<BoundaryCollection, DashboardError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.fail_first {
                return Err(DashboardError::Fetch { url: "test://".into(), reason: "HTTP 503".into() });
            }
            Ok(BoundaryCollection::new(vec![Boundary { name: "Kerala".into(), shape: geo::MultiPolygon(vec![]) }]))
        }

        fn location(&self) -> &str { "test://" }
    }

    #[test]
    fn second_access_does_not_refetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = BoundaryCache::new(CountingSource { calls: calls.clone(), fail_first: 0 });
        let first = cache.get().unwrap();
        let second = cache.get().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn failures_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = BoundaryCache::new(CountingSource { calls: calls.clone(), fail_first: 1 });
        assert!(matches!(cache.get(), Err(DashboardError::Fetch { .. })));
        assert!(!cache.is_loaded());
        assert_eq!(cache.get().unwrap().len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn concurrent_first_visits_share_one_fetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = Arc::new(BoundaryCache::new(CountingSource { calls: calls.clone(), fail_first: 0 }));
        let handles = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get().map(|c| c.len()))
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 1);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn preloaded_never_calls_source() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = BoundaryCache::preloaded(
            CountingSource { calls: calls.clone(), fail_first: 0 },
            BoundaryCollection::default(),
        );
        assert!(cache.get().unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
