/// Crate-wide Result with `anyhow::Error`, so adapters can attach context
/// to `ConfiguratorError` values as they propagate.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
