use crate::compatibility::domain::{ComponentId, ComponentRecord};
use crate::ports::outbound::ComponentCatalog;
use crate::shared::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingComponentCatalog wraps a ComponentCatalog and memoises lookups.
///
/// This adapter implements the decorator pattern. Misses are cached as
/// well, so an unknown id reaches the inner catalog only once. The cache is
/// thread-safe and suitable for concurrent checks. Failed lookups are not
/// cached.
pub struct CachingComponentCatalog<C: ComponentCatalog> {
    inner: C,
    cache: Arc<DashMap<ComponentId, Option<ComponentRecord>>>,
}

impl<C: ComponentCatalog> CachingComponentCatalog<C> {
    /// Creates a new caching catalog wrapping the given inner catalog
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<C: ComponentCatalog> ComponentCatalog for CachingComponentCatalog<C> {
    fn find(&self, id: &ComponentId) -> Result<Option<ComponentRecord>> {
        if let Some(cached) = self.cache.get(id) {
            return Ok(cached.clone());
        }

        let record = self.inner.find(id)?;
        self.cache.insert(id.clone(), record.clone());

        Ok(record)
    }

    fn all(&self) -> Result<Vec<ComponentRecord>> {
        self.inner.all()
    }
}
