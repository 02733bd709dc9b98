use crate::compatibility::domain::{CompatibilityVerdict, ComponentId};
use crate::shared::Result;

/// CompatibilityCheckPort - Inbound port for checking a component selection
///
/// Callers hand over catalog identifiers; resolution goes through the
/// configured catalog. Identifiers that resolve to nothing are skipped, and a
/// selection where nothing resolves yields an `unknown` verdict rather than
/// an error.
pub trait CompatibilityCheckPort {
    /// Checks whether the selected components form a working computer
    ///
    /// # Arguments
    /// * `component_ids` - Selected identifiers; repeat an id to select several units
    ///
    /// # Errors
    /// Returns an error only if the catalog lookup itself fails
    fn check_compatibility(&self, component_ids: &[ComponentId]) -> Result<CompatibilityVerdict>;
}
