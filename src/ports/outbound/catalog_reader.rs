use crate::compatibility::domain::ComponentRecord;
use crate::shared::Result;
use std::path::Path;

/// CatalogReader port for loading a parts catalog
///
/// The catalog format is chosen by the implementation, typically from the
/// file extension.
pub trait CatalogReader {
    /// Reads every component record of the catalog at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog file does not exist or fails the file safety checks
    /// - The content cannot be parsed
    /// - A record is invalid (empty id, negative price) or an id is duplicated
    fn read_catalog(&self, path: &Path) -> Result<Vec<ComponentRecord>>;
}
