//! Compatibility report read model

use serde::Serialize;
use std::collections::BTreeMap;

/// Main read model for a compatibility check
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    pub metadata: ReportMetadataView,
    pub build: BuildView,
    pub verdict: VerdictView,
    pub issues: Vec<IssueView>,
    pub components: Vec<ComponentLineView>,
    pub summary: SummaryView,
    /// Build item ids missing from the catalog
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub report_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerdictView {
    pub is_compatible: bool,
    /// `compatible`, `warning`, `incompatible` or `unknown`
    pub status: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub total_power_consumption: Option<u32>,
    pub recommended_psu_wattage: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueView {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    pub message: String,
    pub components: Vec<String>,
    pub suggestions: Vec<String>,
}

/// One resolved build line
#[derive(Debug, Clone, Serialize)]
pub struct ComponentLineView {
    pub id: String,
    pub category: String,
    pub label: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
    pub power_draw: Option<u32>,
    /// Stock status, or `unknown` when the catalog has none
    pub stock: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub total_price: f64,
    pub total_power_consumption: Option<u32>,
    pub availability: String,
    pub expected_delivery_date: Option<String>,
    pub missing_categories: Vec<String>,
    pub is_complete: bool,
    pub item_count: u32,
    /// Units per category slug
    pub categories: BTreeMap<String, u32>,
}
