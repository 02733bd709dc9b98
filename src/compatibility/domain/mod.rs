pub mod build;
pub mod category;
pub mod component;
pub mod groups;
pub mod issue;
pub mod spec_value;
pub mod specs;
pub mod stock;
pub mod summary;
pub mod verdict;

pub use build::{BuildConfiguration, BuildItem, ResolvedItem, MAX_QUANTITY};
pub use category::Category;
pub use component::{ComponentId, ComponentRecord};
pub use groups::ComponentGroups;
pub use issue::{CompatibilityIssue, IssueKind, Severity};
pub use spec_value::{SpecMap, SpecValue};
pub use specs::{CaseSpecs, ComponentSpecs, CpuSpecs, MotherboardSpecs, PsuSpecs, RamSpecs};
pub use stock::{AvailabilityStatus, StockInfo, StockStatus};
pub use summary::{ConfigurationSummary, ReportMetadata};
pub use verdict::{CompatibilityStatus, CompatibilityVerdict};
