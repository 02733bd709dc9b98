//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that give formatters a flat, denormalized copy of
//! the check and browse results.

mod catalog_view;
mod compatibility_report;
mod report_builder;

pub use catalog_view::{CatalogEntryView, CatalogView};
pub use compatibility_report::{
    BuildView, CompatibilityReport, ComponentLineView, IssueView, ReportMetadataView,
    SummaryView, VerdictView,
};
pub use report_builder::{CatalogViewBuilder, CompatibilityReportBuilder};
