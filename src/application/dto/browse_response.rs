use crate::compatibility::domain::ComponentId;
use crate::compatibility::services::{FilterOptions, FilteredPage};

/// BrowseResponse - Internal response DTO from the catalog browse use case
#[derive(Debug, Clone)]
pub struct BrowseResponse {
    pub page: FilteredPage,
    pub options: Option<FilterOptions>,
    /// Selected ids that were applied as compatibility constraints
    pub compatible_with: Vec<ComponentId>,
    /// Selected ids the catalog does not know
    pub unresolved: Vec<ComponentId>,
}
