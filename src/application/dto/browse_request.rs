use crate::compatibility::domain::ComponentId;
use crate::compatibility::services::ComponentFilter;

/// BrowseRequest - Internal request DTO for the catalog browse use case
#[derive(Debug, Clone, Default)]
pub struct BrowseRequest {
    pub filter: ComponentFilter,
    /// Already-selected parts; only candidates compatible with all of them are listed
    pub compatible_with: Vec<ComponentId>,
    /// Also compute the distinct filter values of the browsed category
    pub include_options: bool,
}
