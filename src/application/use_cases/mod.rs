mod browse_catalog;
mod check_compatibility;

pub use browse_catalog::BrowseCatalogUseCase;
pub use check_compatibility::CheckCompatibilityUseCase;
