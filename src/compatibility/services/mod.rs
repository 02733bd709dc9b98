mod catalog_filter;
mod compatibility_checker;
mod configuration_summarizer;
mod report_generator;

pub use catalog_filter::{
    CatalogFilter, ComponentFilter, FilterOptions, FilteredPage, PriceRange, DEFAULT_PAGE_LIMIT,
    MAX_PAGE_LIMIT,
};
pub use compatibility_checker::CompatibilityChecker;
pub use configuration_summarizer::ConfigurationSummarizer;
pub use report_generator::{ReportGenerator, TOOL_NAME};
