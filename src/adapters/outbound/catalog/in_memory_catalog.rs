use crate::compatibility::domain::{ComponentId, ComponentRecord};
use crate::ports::outbound::ComponentCatalog;
use crate::shared::error::ConfiguratorError;
use crate::shared::Result;
use std::collections::HashMap;

/// InMemoryCatalog adapter holding a fully loaded parts catalog
///
/// Records keep their load order for browsing; lookups go through an id index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<ComponentRecord>,
    index: HashMap<ComponentId, usize>,
}

impl InMemoryCatalog {
    /// Builds the catalog, rejecting duplicate identifiers
    pub fn new(records: Vec<ComponentRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id().clone(), position).is_some() {
                return Err(ConfiguratorError::InvalidComponent {
                    id: record.id().to_string(),
                    reason: "identifier appears more than once in the catalog".to_string(),
                }
                .into());
            }
        }

        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ComponentCatalog for InMemoryCatalog {
    fn find(&self, id: &ComponentId) -> Result<Option<ComponentRecord>> {
        Ok(self
            .index
            .get(id)
            .and_then(|position| self.records.get(*position))
            .cloned())
    }

    fn all(&self) -> Result<Vec<ComponentRecord>> {
        Ok(self.records.clone())
    }
}
