use crate::compatibility::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

pub const TOOL_NAME: &str = "pc-configurator";

/// ReportGenerator service for stamping compatibility reports
pub struct ReportGenerator;

impl ReportGenerator {
    /// Generates report metadata with the current UTC time and a fresh report id
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool producing the report
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Metadata carrying this crate's name and compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.report_id().starts_with("urn:uuid:"));
        assert!(!metadata.timestamp().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_name(), "pc-configurator");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let metadata = ReportGenerator::generate_metadata("test-tool", "1.0.0");
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_report_ids_are_unique() {
        let first = ReportGenerator::generate_metadata("test-tool", "1.0.0");
        let second = ReportGenerator::generate_metadata("test-tool", "1.0.0");
        assert_ne!(first.report_id(), second.report_id());
    }
}
