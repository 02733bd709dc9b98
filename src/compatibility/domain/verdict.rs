use super::issue::{CompatibilityIssue, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall compatibility status of a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityStatus {
    Compatible,
    Warning,
    Incompatible,
    Unknown,
}

impl CompatibilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityStatus::Compatible => "compatible",
            CompatibilityStatus::Warning => "warning",
            CompatibilityStatus::Incompatible => "incompatible",
            CompatibilityStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CompatibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate result of one compatibility check.
///
/// `is_compatible` is derived from `status` at construction and cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityVerdict {
    is_compatible: bool,
    status: CompatibilityStatus,
    issues: Vec<CompatibilityIssue>,
    total_power_consumption: Option<u32>,
    recommended_psu_wattage: Option<u32>,
}

impl CompatibilityVerdict {
    pub fn new(
        status: CompatibilityStatus,
        issues: Vec<CompatibilityIssue>,
        total_power_consumption: Option<u32>,
        recommended_psu_wattage: Option<u32>,
    ) -> Self {
        Self {
            is_compatible: status == CompatibilityStatus::Compatible,
            status,
            issues,
            total_power_consumption,
            recommended_psu_wattage,
        }
    }

    /// Verdict for a set that resolved to no records
    pub fn unknown() -> Self {
        Self::new(CompatibilityStatus::Unknown, Vec::new(), None, None)
    }

    pub fn is_compatible(&self) -> bool {
        self.is_compatible
    }

    pub fn status(&self) -> CompatibilityStatus {
        self.status
    }

    pub fn issues(&self) -> &[CompatibilityIssue] {
        &self.issues
    }

    pub fn total_power_consumption(&self) -> Option<u32> {
        self.total_power_consumption
    }

    pub fn recommended_psu_wattage(&self) -> Option<u32> {
        self.recommended_psu_wattage
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}
