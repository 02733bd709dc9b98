use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems and shell scripts to tell an incompatible
/// build apart from a broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - build is at or below the configured failure threshold
    Success = 0,
    /// The build reached the configured failure threshold
    IncompatibleBuild = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, malformed catalog or build file, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IncompatibleBuild => write!(f, "Incompatible Build (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the configurator.
///
/// Domain conditions (an incompatible build, an unknown component id) are
/// never errors; these variants only cover input that cannot be interpreted.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the catalog is valid JSON or TOML with a top-level `components` list")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Failed to parse build file: {path}\nDetails: {details}\n\n💡 Hint: A build file needs a `name` and a list of `items`, each with a `component_id`")]
    BuildParseError { path: PathBuf, details: String },

    #[error("Invalid component record '{id}': {reason}\n\n💡 Hint: Fix the record in the catalog file")]
    InvalidComponent { id: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects and builders
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::IncompatibleBuild.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::IncompatibleBuild),
            "Incompatible Build (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_catalog_not_found_display() {
        let error = ConfiguratorError::CatalogNotFound {
            path: PathBuf::from("/data/catalog.json"),
            suggestion: "Pass --catalog".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Catalog file not found"));
        assert!(display.contains("/data/catalog.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Pass --catalog"));
    }

    #[test]
    fn test_build_parse_error_display() {
        let error = ConfiguratorError::BuildParseError {
            path: PathBuf::from("build.yml"),
            details: "missing field `items`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse build file"));
        assert!(display.contains("missing field `items`"));
        assert!(display.contains("component_id"));
    }

    #[test]
    fn test_invalid_component_display() {
        let error = ConfiguratorError::InvalidComponent {
            id: "cpu-1".to_string(),
            reason: "price must not be negative".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("cpu-1"));
        assert!(display.contains("price must not be negative"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ConfiguratorError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
