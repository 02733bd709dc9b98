use crate::application::read_models::{CatalogView, CompatibilityReport};
use crate::shared::Result;

/// ReportFormatter port for rendering output documents
///
/// This port abstracts the output format (JSON, Markdown) of both the
/// compatibility report and the catalog browse listing.
pub trait ReportFormatter {
    /// Formats a compatibility report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CompatibilityReport) -> Result<String>;

    /// Formats one page of a catalog listing
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_catalog(&self, view: &CatalogView) -> Result<String>;
}
