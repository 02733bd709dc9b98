/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod browse_request;
mod browse_response;
mod check_request;
mod check_response;
mod fail_threshold;
mod output_format;

pub use browse_request::BrowseRequest;
pub use browse_response::BrowseResponse;
pub use check_request::CheckRequest;
pub use check_response::CheckResponse;
pub use fail_threshold::FailThreshold;
pub use output_format::OutputFormat;
