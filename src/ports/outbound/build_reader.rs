use crate::compatibility::domain::BuildConfiguration;
use crate::shared::Result;
use std::path::Path;

/// BuildReader port for loading a build description
pub trait BuildReader {
    /// Reads and validates the build file at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the file safety checks
    /// - The content is not a valid build (empty name, zero quantity, bad id)
    fn read_build(&self, path: &Path) -> Result<BuildConfiguration>;
}
