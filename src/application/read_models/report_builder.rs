//! Builders turning use case responses into read models

use super::catalog_view::{CatalogEntryView, CatalogView};
use super::compatibility_report::{
    BuildView, CompatibilityReport, ComponentLineView, IssueView, ReportMetadataView,
    SummaryView, VerdictView,
};
use crate::application::dto::{BrowseResponse, CheckResponse};
use crate::compatibility::domain::specs::{
    CAPACITY_GB, INTERFACE, MAX_MEMORY_GB, MEMORY_SLOTS, MEMORY_TYPE, SOCKET,
    SUPPORTED_FORM_FACTORS, WATTAGE,
};
use crate::compatibility::domain::{
    CompatibilityIssue, CompatibilityVerdict, ComponentRecord, ConfigurationSummary,
    ReportMetadata, ResolvedItem, Severity, StockInfo, StockStatus,
};
use std::collections::BTreeMap;

/// Attribute keys surfaced in catalog listings
const HIGHLIGHT_KEYS: [&str; 8] = [
    SOCKET,
    MEMORY_TYPE,
    CAPACITY_GB,
    MAX_MEMORY_GB,
    MEMORY_SLOTS,
    SUPPORTED_FORM_FACTORS,
    WATTAGE,
    INTERFACE,
];

/// Builder for constructing a CompatibilityReport from a check response
pub struct CompatibilityReportBuilder;

impl CompatibilityReportBuilder {
    pub fn build(response: &CheckResponse) -> CompatibilityReport {
        CompatibilityReport {
            metadata: Self::build_metadata(&response.metadata),
            build: BuildView {
                name: response.build.name().to_string(),
                description: response.build.description().map(str::to_string),
            },
            verdict: Self::build_verdict(&response.verdict),
            issues: response.verdict.issues().iter().map(Self::build_issue).collect(),
            components: response.items.iter().map(Self::build_line).collect(),
            summary: Self::build_summary(&response.summary, &response.items),
            unresolved: response.unresolved.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    fn build_verdict(verdict: &CompatibilityVerdict) -> VerdictView {
        VerdictView {
            is_compatible: verdict.is_compatible(),
            status: verdict.status().to_string(),
            error_count: verdict.count_by_severity(Severity::Error),
            warning_count: verdict.count_by_severity(Severity::Warning),
            total_power_consumption: verdict.total_power_consumption(),
            recommended_psu_wattage: verdict.recommended_psu_wattage(),
        }
    }

    fn build_issue(issue: &CompatibilityIssue) -> IssueView {
        IssueView {
            kind: issue.kind.to_string(),
            severity: issue.severity.to_string(),
            message: issue.message.clone(),
            components: issue.component_ids.iter().map(|id| id.to_string()).collect(),
            suggestions: issue.suggestions.clone(),
        }
    }

    fn build_line(item: &ResolvedItem) -> ComponentLineView {
        ComponentLineView {
            id: item.record.id().to_string(),
            category: item.record.category().slug().to_string(),
            label: item.record.display_label(),
            quantity: item.quantity,
            unit_price: item.unit_price(),
            line_total: item.line_total(),
            power_draw: item.record.power_draw(),
            stock: stock_label(item.record.stock()),
            notes: item.notes.clone(),
        }
    }

    fn build_summary(summary: &ConfigurationSummary, items: &[ResolvedItem]) -> SummaryView {
        let mut categories = BTreeMap::new();
        for item in items {
            *categories
                .entry(item.record.category().slug().to_string())
                .or_insert(0u32) += item.quantity;
        }

        SummaryView {
            total_price: summary.total_price,
            total_power_consumption: summary.total_power_consumption,
            availability: summary.availability.to_string(),
            expected_delivery_date: summary.expected_delivery_date.map(|d| d.to_string()),
            missing_categories: summary
                .missing_categories
                .iter()
                .map(|c| c.slug().to_string())
                .collect(),
            is_complete: summary.is_complete(),
            item_count: summary.item_count,
            categories,
        }
    }
}

/// Builder for constructing a CatalogView from a browse response
pub struct CatalogViewBuilder;

impl CatalogViewBuilder {
    pub fn build(response: &BrowseResponse) -> CatalogView {
        CatalogView {
            components: response.page.items.iter().map(Self::build_entry).collect(),
            total: response.page.total,
            page: response.page.page,
            limit: response.page.limit,
            total_pages: response.page.total_pages(),
            compatible_with: response
                .compatible_with
                .iter()
                .map(|id| id.to_string())
                .collect(),
            filter_options: response.options.clone(),
        }
    }

    fn build_entry(record: &ComponentRecord) -> CatalogEntryView {
        let highlights: BTreeMap<String, String> = HIGHLIGHT_KEYS
            .iter()
            .filter_map(|key| {
                record
                    .attributes()
                    .get(key)
                    .map(|value| (key.to_string(), value.to_string()))
            })
            .filter(|(_, value)| !value.is_empty())
            .collect();

        CatalogEntryView {
            id: record.id().to_string(),
            category: record.category().slug().to_string(),
            brand: record.brand().to_string(),
            name: record.name().to_string(),
            model: record.model().to_string(),
            price: record.price(),
            power_draw: record.power_draw(),
            form_factor: record.form_factor().map(str::to_string),
            stock: stock_label(record.stock()),
            highlights,
        }
    }
}

/// `in_stock`, `out_of_stock`, `expected 2026-11-02` or `unknown`
fn stock_label(stock: Option<&StockInfo>) -> String {
    match stock {
        Some(StockInfo {
            status: StockStatus::Expected,
            expected_date: Some(date),
            ..
        }) => format!("expected {}", date),
        Some(stock) => stock.status.to_string(),
        None => "unknown".to_string(),
    }
}
