use crate::compatibility::domain::{ComponentId, ComponentRecord};
use crate::shared::Result;

/// Records found for a selection, plus the identifiers that matched nothing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub records: Vec<ComponentRecord>,
    pub unresolved: Vec<ComponentId>,
}

/// ComponentCatalog port for looking up component records
///
/// This is the synchronous lookup capability behind the compatibility
/// check. Implementations must be `Send + Sync` so one catalog can serve
/// concurrent checks.
pub trait ComponentCatalog: Send + Sync {
    /// Looks up a single record
    ///
    /// # Returns
    /// `Ok(None)` when the identifier is not in the catalog
    fn find(&self, id: &ComponentId) -> Result<Option<ComponentRecord>>;

    /// Returns every record in catalog order
    fn all(&self) -> Result<Vec<ComponentRecord>>;

    /// Resolves a selection, keeping input order and repeated identifiers
    fn resolve(&self, ids: &[ComponentId]) -> Result<Resolution> {
        let mut resolution = Resolution::default();
        for id in ids {
            match self.find(id)? {
                Some(record) => resolution.records.push(record),
                None => resolution.unresolved.push(id.clone()),
            }
        }
        Ok(resolution)
    }
}
