use crate::compatibility::domain::{CompatibilityIssue, CompatibilityStatus, Severity};

/// StatusPolicy - collapses an issue list into an overall status
///
/// Precedence: any error gives `Incompatible`, otherwise any warning gives
/// `Warning`, otherwise `Compatible`. Info issues never change the status.
pub struct StatusPolicy;

impl StatusPolicy {
    pub fn resolve(issues: &[CompatibilityIssue]) -> CompatibilityStatus {
        match issues.iter().map(|issue| issue.severity).max() {
            Some(Severity::Error) => CompatibilityStatus::Incompatible,
            Some(Severity::Warning) => CompatibilityStatus::Warning,
            Some(Severity::Info) | None => CompatibilityStatus::Compatible,
        }
    }
}
