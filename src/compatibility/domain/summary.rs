use super::category::Category;
use super::stock::AvailabilityStatus;
use chrono::NaiveDate;

/// Aggregate figures of a build, independent of the compatibility rules
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationSummary {
    pub total_price: f64,
    /// Power draw times quantity; `None` when no item reports power
    pub total_power_consumption: Option<u32>,
    pub availability: AvailabilityStatus,
    /// Latest expected date reported by any item
    pub expected_delivery_date: Option<NaiveDate>,
    pub missing_categories: Vec<Category>,
    pub item_count: u32,
}

impl ConfigurationSummary {
    pub fn empty(missing_categories: Vec<Category>) -> Self {
        Self {
            total_price: 0.0,
            total_power_consumption: None,
            availability: AvailabilityStatus::Unknown,
            expected_delivery_date: None,
            missing_categories,
            item_count: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_categories.is_empty()
    }
}

/// Report metadata value object
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    report_id: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, report_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            report_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }
}
