use crate::compatibility::domain::Category;
use std::path::PathBuf;

/// CheckRequest - Internal request DTO for the compatibility check use case
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Path to the build file
    pub build_path: PathBuf,
    /// Categories a complete build must contain
    pub essential_categories: Vec<Category>,
}

impl CheckRequest {
    pub fn new(build_path: PathBuf, essential_categories: Vec<Category>) -> Self {
        Self {
            build_path,
            essential_categories,
        }
    }
}
