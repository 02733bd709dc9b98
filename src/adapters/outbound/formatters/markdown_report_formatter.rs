use crate::application::read_models::{
    CatalogView, CompatibilityReport, ComponentLineView, IssueView, SummaryView, VerdictView,
};
use crate::compatibility::services::FilterOptions;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for build components
const COMPONENT_TABLE_HEADER: &str =
    "| Component | Category | Qty | Unit Price | Line Total | Power (W) | Stock |\n";

/// Markdown table separator line for build components
const COMPONENT_TABLE_SEPARATOR: &str =
    "|-----------|----------|-----|------------|------------|-----------|-------|\n";

/// Markdown table header for compatibility issues
const ISSUE_TABLE_HEADER: &str = "| Severity | Type | Message | Components | Suggestions |\n";

/// Markdown table separator line for compatibility issues
const ISSUE_TABLE_SEPARATOR: &str = "|----------|------|---------|------------|-------------|\n";

/// Markdown table header for catalog listings
const CATALOG_TABLE_HEADER: &str =
    "| ID | Brand | Name | Category | Price | Power (W) | Form Factor | Stock | Details |\n";

/// Markdown table separator line for catalog listings
const CATALOG_TABLE_SEPARATOR: &str =
    "|----|-------|------|----------|-------|-----------|-------------|-------|---------|\n";

/// MarkdownReportFormatter adapter for human-readable reports
///
/// This adapter implements the ReportFormatter port for Markdown, rendering
/// the verdict, issues, power budget, component list and availability summary.
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn status_badge(status: &str) -> &'static str {
        match status {
            "compatible" => "✅ Compatible",
            "warning" => "⚠️ Compatible with warnings",
            "incompatible" => "❌ Incompatible",
            _ => "❔ Unknown",
        }
    }

    fn severity_badge(severity: &str) -> String {
        match severity {
            "error" => "❌ error".to_string(),
            "warning" => "⚠️ warning".to_string(),
            "info" => "ℹ️ info".to_string(),
            other => other.to_string(),
        }
    }

    fn watts(value: Option<u32>) -> String {
        value.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string())
    }

    fn price(value: f64) -> String {
        format!("{:.2}", value)
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering report sections
impl MarkdownReportFormatter {
    fn render_header(&self, output: &mut String, report: &CompatibilityReport) {
        output.push_str("# PC Build Compatibility Report\n\n");
        output.push_str("## Configuration\n\n");
        output.push_str(&format!("- **Build**: {}\n", report.build.name));
        if let Some(description) = &report.build.description {
            output.push_str(&format!("- **Description**: {}\n", description));
        }
        output.push_str(&format!(
            "- **Generated**: {} by {} {}\n",
            report.metadata.timestamp, report.metadata.tool_name, report.metadata.tool_version
        ));
        output.push_str(&format!("- **Report ID**: `{}`\n\n", report.metadata.report_id));
    }

    fn render_verdict(&self, output: &mut String, verdict: &VerdictView) {
        output.push_str("## Verdict\n\n");
        output.push_str(&format!(
            "**Status: {}**\n\n",
            Self::status_badge(&verdict.status)
        ));
        output.push_str(&format!(
            "{} {}, {} {}.\n\n",
            verdict.error_count,
            if verdict.error_count == 1 { "error" } else { "errors" },
            verdict.warning_count,
            if verdict.warning_count == 1 {
                "warning"
            } else {
                "warnings"
            }
        ));
    }

    fn render_issues(&self, output: &mut String, issues: &[IssueView]) {
        output.push_str("## Issues\n\n");
        if issues.is_empty() {
            output.push_str("*No compatibility issues found*\n\n");
            return;
        }

        output.push_str(ISSUE_TABLE_HEADER);
        output.push_str(ISSUE_TABLE_SEPARATOR);
        for issue in issues {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::severity_badge(&issue.severity),
                Self::escape_markdown_table_cell(&issue.kind),
                Self::escape_markdown_table_cell(&issue.message),
                Self::escape_markdown_table_cell(&issue.components.join(", ")),
                Self::escape_markdown_table_cell(&issue.suggestions.join("; ")),
            ));
        }
        output.push('\n');
    }

    fn render_power(&self, output: &mut String, verdict: &VerdictView) {
        output.push_str("## Power\n\n");
        match verdict.total_power_consumption {
            Some(total) => {
                output.push_str(&format!("- **Estimated consumption**: {} W\n", total));
                output.push_str(&format!(
                    "- **Recommended PSU**: {}\n\n",
                    verdict
                        .recommended_psu_wattage
                        .map(|w| format!("{} W or more", w))
                        .unwrap_or_else(|| "-".to_string())
                ));
            }
            None => output.push_str("*No component reports a power draw*\n\n"),
        }
    }

    fn render_components(&self, output: &mut String, components: &[ComponentLineView]) {
        output.push_str("## Components\n\n");
        if components.is_empty() {
            output.push_str("*No components resolved*\n\n");
            return;
        }

        output.push_str(COMPONENT_TABLE_HEADER);
        output.push_str(COMPONENT_TABLE_SEPARATOR);
        for line in components {
            let mut label = Self::escape_markdown_table_cell(&line.label);
            if let Some(notes) = &line.notes {
                label.push_str(&format!(" ({})", Self::escape_markdown_table_cell(notes)));
            }
            output.push_str(&format!(
                "| {} `{}` | {} | {} | {} | {} | {} | {} |\n",
                label,
                Self::escape_markdown_table_cell(&line.id),
                line.category,
                line.quantity,
                Self::price(line.unit_price),
                Self::price(line.line_total),
                Self::watts(line.power_draw),
                line.stock,
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- **Items**: {}\n", summary.item_count));
        if !summary.categories.is_empty() {
            let counts: Vec<String> = summary
                .categories
                .iter()
                .map(|(category, count)| format!("{} x{}", category, count))
                .collect();
            output.push_str(&format!("- **By category**: {}\n", counts.join(", ")));
        }
        output.push_str(&format!(
            "- **Total price**: {}\n",
            Self::price(summary.total_price)
        ));
        output.push_str(&format!(
            "- **Total power**: {}\n",
            summary
                .total_power_consumption
                .map(|w| format!("{} W", w))
                .unwrap_or_else(|| "-".to_string())
        ));
        output.push_str(&format!("- **Availability**: {}\n", summary.availability));
        if let Some(date) = &summary.expected_delivery_date {
            output.push_str(&format!("- **Expected delivery**: {}\n", date));
        }
        if summary.is_complete {
            output.push_str("- **Completeness**: all essential categories present\n\n");
        } else {
            output.push_str(&format!(
                "- **Missing categories**: {}\n\n",
                summary.missing_categories.join(", ")
            ));
        }
    }

    fn render_unresolved(&self, output: &mut String, unresolved: &[String]) {
        if unresolved.is_empty() {
            return;
        }
        output.push_str("## Unresolved Components\n\n");
        output.push_str("These build items were not found in the catalog and were skipped.\n\n");
        for id in unresolved {
            output.push_str(&format!("- `{}`\n", id));
        }
        output.push('\n');
    }

    fn render_filter_options(&self, output: &mut String, options: &FilterOptions) {
        output.push_str("## Filter Options\n\n");
        let rows = [
            ("Brands", &options.brands),
            ("Form factors", &options.form_factors),
            ("Sockets", &options.sockets),
            ("Memory types", &options.memory_types),
            ("Interfaces", &options.interfaces),
        ];
        for (label, values) in rows {
            if !values.is_empty() {
                output.push_str(&format!("- **{}**: {}\n", label, values.join(", ")));
            }
        }
        output.push_str(&format!(
            "- **Price range**: {} - {}\n\n",
            Self::price(options.price_range.min),
            Self::price(options.price_range.max)
        ));
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &CompatibilityReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_verdict(&mut output, &report.verdict);
        self.render_issues(&mut output, &report.issues);
        self.render_power(&mut output, &report.verdict);
        self.render_components(&mut output, &report.components);
        self.render_summary(&mut output, &report.summary);
        self.render_unresolved(&mut output, &report.unresolved);

        Ok(output)
    }

    fn format_catalog(&self, catalog: &CatalogView) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Component Catalog\n\n");
        if !catalog.compatible_with.is_empty() {
            output.push_str(&format!(
                "Compatible with: {}\n\n",
                catalog
                    .compatible_with
                    .iter()
                    .map(|id| format!("`{}`", id))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
        output.push_str(&format!(
            "Showing page {} of {} ({} matching {}).\n\n",
            catalog.page,
            catalog.total_pages.max(1),
            catalog.total,
            if catalog.total == 1 {
                "component"
            } else {
                "components"
            }
        ));

        if catalog.components.is_empty() {
            output.push_str("*No components match the filter*\n\n");
        } else {
            output.push_str(CATALOG_TABLE_HEADER);
            output.push_str(CATALOG_TABLE_SEPARATOR);
            for entry in &catalog.components {
                let details = entry
                    .highlights
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect::<Vec<_>>()
                    .join("; ");
                output.push_str(&format!(
                    "| `{}` | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&entry.id),
                    Self::escape_markdown_table_cell(&entry.brand),
                    Self::escape_markdown_table_cell(&entry.name),
                    entry.category,
                    Self::price(entry.price),
                    Self::watts(entry.power_draw),
                    Self::escape_markdown_table_cell(entry.form_factor.as_deref().unwrap_or("-")),
                    entry.stock,
                    Self::escape_markdown_table_cell(&details),
                ));
            }
            output.push('\n');
        }

        if let Some(options) = &catalog.filter_options {
            self.render_filter_options(&mut output, options);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::fixtures::{sample_catalog, sample_report};
    use crate::compatibility::services::PriceRange;

    #[test]
    fn test_format_report_sections() {
        let output = MarkdownReportFormatter::new()
            .format(&sample_report())
            .unwrap();

        assert!(output.starts_with("# PC Build Compatibility Report"));
        assert!(output.contains("## Verdict"));
        assert!(output.contains("❌ Incompatible"));
        assert!(output.contains("1 error, 0 warnings."));
        assert!(output.contains("## Issues"));
        assert!(output.contains("socket_mismatch"));
        assert!(output.contains("- **Recommended PSU**: 600 W or more"));
        assert!(output.contains("## Components"));
        assert!(output.contains("| 2 | 55.50 | 111.00 | - | expected 2026-11-20 |"));
        assert!(output.contains("(matched pair)"));
        assert!(output.contains("- **Missing categories**: storage"));
        assert!(output.contains("- **By category**: cpu x1, ram x2"));
        assert!(output.contains("- **Expected delivery**: 2026-11-20"));
        assert!(output.contains("## Unresolved Components"));
        assert!(output.contains("- `gpu-ghost`"));
    }

    #[test]
    fn test_format_compatible_report_without_issues() {
        let mut report = sample_report();
        report.issues.clear();
        report.unresolved.clear();
        report.verdict.status = "compatible".to_string();
        report.verdict.is_compatible = true;
        report.verdict.error_count = 0;
        report.summary.is_complete = true;
        report.summary.missing_categories.clear();

        let output = MarkdownReportFormatter::new().format(&report).unwrap();
        assert!(output.contains("✅ Compatible"));
        assert!(output.contains("*No compatibility issues found*"));
        assert!(output.contains("all essential categories present"));
        assert!(!output.contains("## Unresolved Components"));
    }

    #[test]
    fn test_format_report_without_power_data() {
        let mut report = sample_report();
        report.verdict.total_power_consumption = None;
        report.verdict.recommended_psu_wattage = None;

        let output = MarkdownReportFormatter::new().format(&report).unwrap();
        assert!(output.contains("*No component reports a power draw*"));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownReportFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_format_catalog() {
        let output = MarkdownReportFormatter::new()
            .format_catalog(&sample_catalog())
            .unwrap();

        assert!(output.starts_with("# Component Catalog"));
        assert!(output.contains("Compatible with: `cpu-1`"));
        assert!(output.contains("Showing page 2 of 2 (21 matching components)."));
        assert!(output.contains("| `mb-1` | ASUS | TUF B650 | motherboard | 189.00 | 50 | ATX | in_stock | socket: AM5 |"));
        assert!(!output.contains("## Filter Options"));
    }

    #[test]
    fn test_format_catalog_with_options() {
        let mut catalog = sample_catalog();
        catalog.components.clear();
        catalog.filter_options = Some(FilterOptions {
            brands: vec!["AMD".to_string(), "Intel".to_string()],
            form_factors: vec![],
            sockets: vec!["AM5".to_string()],
            memory_types: vec![],
            interfaces: vec![],
            price_range: PriceRange {
                min: 10.0,
                max: 999.0,
            },
        });

        let output = MarkdownReportFormatter::new()
            .format_catalog(&catalog)
            .unwrap();
        assert!(output.contains("*No components match the filter*"));
        assert!(output.contains("- **Brands**: AMD, Intel"));
        assert!(!output.contains("Form factors"));
        assert!(output.contains("- **Price range**: 10.00 - 999.00"));
    }
}
