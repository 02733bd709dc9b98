use super::component::ComponentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of compatibility problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    SocketMismatch,
    MemoryTypeMismatch,
    MemoryCapacityExceeded,
    MemorySlotsExceeded,
    FormFactorMismatch,
    PowerInsufficient,
    PowerWarning,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::SocketMismatch => "socket_mismatch",
            IssueKind::MemoryTypeMismatch => "memory_type_mismatch",
            IssueKind::MemoryCapacityExceeded => "memory_capacity_exceeded",
            IssueKind::MemorySlotsExceeded => "memory_slots_exceeded",
            IssueKind::FormFactorMismatch => "form_factor_mismatch",
            IssueKind::PowerInsufficient => "power_insufficient",
            IssueKind::PowerWarning => "power_warning",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of an issue. `Info` never changes the verdict status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single detected compatibility problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    pub component_ids: Vec<ComponentId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl CompatibilityIssue {
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        message: impl Into<String>,
        component_ids: Vec<ComponentId>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            component_ids,
            suggestions: Vec::new(),
        }
    }

    pub fn error(kind: IssueKind, message: impl Into<String>, ids: Vec<ComponentId>) -> Self {
        Self::new(kind, Severity::Error, message, ids)
    }

    pub fn warning(kind: IssueKind, message: impl Into<String>, ids: Vec<ComponentId>) -> Self {
        Self::new(kind, Severity::Warning, message, ids)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn involves(&self, id: &ComponentId) -> bool {
        self.component_ids.contains(id)
    }
}
