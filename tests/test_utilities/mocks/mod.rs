/// Mock implementations for testing
mod mock_build_reader;
mod mock_component_catalog;
mod mock_progress_reporter;

pub use mock_build_reader::MockBuildReader;
pub use mock_component_catalog::MockComponentCatalog;
pub use mock_progress_reporter::MockProgressReporter;
