use crate::compatibility::domain::CompatibilityStatus;

/// Verdict status at which the `check` command exits with a failure code
///
/// An `unknown` verdict never reaches a threshold: nothing was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailThreshold {
    /// Fail on warnings and on incompatible builds
    Warning,
    /// Fail only on incompatible builds (default)
    #[default]
    Incompatible,
}

impl FailThreshold {
    pub fn is_reached_by(&self, status: CompatibilityStatus) -> bool {
        match self {
            FailThreshold::Warning => matches!(
                status,
                CompatibilityStatus::Warning | CompatibilityStatus::Incompatible
            ),
            FailThreshold::Incompatible => status == CompatibilityStatus::Incompatible,
        }
    }
}

impl std::str::FromStr for FailThreshold {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warning" => Ok(FailThreshold::Warning),
            "incompatible" => Ok(FailThreshold::Incompatible),
            _ => Err(format!(
                "Invalid fail threshold: {}. Please specify 'warning' or 'incompatible'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FailThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailThreshold::Warning => write!(f, "warning"),
            FailThreshold::Incompatible => write!(f, "incompatible"),
        }
    }
}
