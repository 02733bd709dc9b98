/// Catalog adapters implementing the ComponentCatalog port
mod caching_catalog;
mod in_memory_catalog;

pub use caching_catalog::CachingComponentCatalog;
pub use in_memory_catalog::InMemoryCatalog;
