use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use pc_configurator::prelude::*;

/// Mock ComponentCatalog for testing that counts lookups
#[derive(Default, Clone)]
pub struct MockComponentCatalog {
    pub records: Vec<ComponentRecord>,
    pub should_fail: bool,
    pub lookups: Arc<AtomicUsize>,
}

impl MockComponentCatalog {
    pub fn new(records: Vec<ComponentRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ComponentCatalog for MockComponentCatalog {
    fn find(&self, id: &ComponentId) -> Result<Option<ComponentRecord>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock catalog lookup failure");
        }
        Ok(self.records.iter().find(|r| r.id() == id).cloned())
    }

    fn all(&self) -> Result<Vec<ComponentRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog lookup failure");
        }
        Ok(self.records.clone())
    }
}
