//! pc-configurator - PC build compatibility checking
//!
//! This library checks a selection of PC components for compatibility
//! (socket, memory, form factor and power budget), summarises price and
//! availability, and browses a parts catalog. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compatibility`): Pure rule engine and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pc_configurator::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let records = FileSystemReader::new().read_catalog(Path::new("catalog.json"))?;
//! let catalog = CachingComponentCatalog::new(InMemoryCatalog::new(records)?);
//!
//! // Create use case
//! let use_case = CheckCompatibilityUseCase::new(
//!     catalog,
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = CheckRequest::new(PathBuf::from("build.yml"), Category::ESSENTIAL.to_vec());
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let report = CompatibilityReportBuilder::build(&response);
//! println!("{}", JsonReportFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! The rule engine can also be used on its own:
//!
//! ```
//! use pc_configurator::prelude::*;
//!
//! let verdict = CompatibilityChecker::check(&[]);
//! assert_eq!(verdict.status(), CompatibilityStatus::Unknown);
//! ```

pub mod adapters;
pub mod application;
pub mod compatibility;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{CachingComponentCatalog, InMemoryCatalog};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
    pub use crate::application::dto::{
        BrowseRequest, BrowseResponse, CheckRequest, CheckResponse, FailThreshold, OutputFormat,
    };
    pub use crate::application::read_models::{
        CatalogView, CatalogViewBuilder, CompatibilityReport, CompatibilityReportBuilder,
    };
    pub use crate::application::use_cases::{BrowseCatalogUseCase, CheckCompatibilityUseCase};
    pub use crate::compatibility::domain::{
        BuildConfiguration, BuildItem, Category, CompatibilityIssue, CompatibilityStatus,
        CompatibilityVerdict, ComponentId, ComponentRecord, ComponentSpecs, IssueKind, Severity,
        SpecMap, SpecValue, StockInfo, StockStatus,
    };
    pub use crate::compatibility::services::{
        CatalogFilter, CompatibilityChecker, ComponentFilter, ConfigurationSummarizer,
    };
    pub use crate::ports::inbound::CompatibilityCheckPort;
    pub use crate::ports::outbound::{
        BuildReader, CatalogReader, ComponentCatalog, OutputPresenter, ProgressReporter,
        ReportFormatter, Resolution,
    };
    pub use crate::shared::error::{ConfiguratorError, ExitCode};
    pub use crate::shared::Result;
}
