use crate::compatibility::domain::{
    BuildConfiguration, CompatibilityVerdict, ComponentId, ConfigurationSummary, ReportMetadata,
    ResolvedItem,
};

/// CheckResponse - Internal response DTO from the compatibility check use case
///
/// Carries the domain results; adapters turn it into a report through the
/// read model builder.
#[derive(Debug, Clone)]
pub struct CheckResponse {
    pub build: BuildConfiguration,
    /// Build items found in the catalog, in build order
    pub items: Vec<ResolvedItem>,
    pub verdict: CompatibilityVerdict,
    pub summary: ConfigurationSummary,
    /// Build item ids the catalog does not know
    pub unresolved: Vec<ComponentId>,
    pub metadata: ReportMetadata,
}
