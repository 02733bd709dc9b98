use crate::application::read_models::{CatalogView, CompatibilityReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter for machine-readable output
///
/// Serializes the read models as pretty-printed JSON. Field names follow
/// the read model structs.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &CompatibilityReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(Into::into)
    }

    fn format_catalog(&self, catalog: &CatalogView) -> Result<String> {
        serde_json::to_string_pretty(catalog).map_err(Into::into)
    }
}
