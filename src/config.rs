//! Configuration file support for pc-configurator.
//!
//! Provides YAML-based configuration through `pc-configurator.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::{FailThreshold, OutputFormat};
use crate::compatibility::domain::Category;
use crate::shared::security::read_checked;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pc-configurator.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub catalog: Option<PathBuf>,
    pub fail_on: Option<String>,
    pub essential_categories: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
    /// Directory of the file this configuration was loaded from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }

    pub fn fail_threshold(&self) -> Option<FailThreshold> {
        self.fail_on
            .as_deref()
            .and_then(|f| FailThreshold::from_str(f).ok())
    }

    /// Catalog path, relative paths resolved against the config file's directory
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let catalog = self.catalog.as_ref()?;
        match &self.base_dir {
            Some(base) if catalog.is_relative() => Some(base.join(catalog)),
            _ => Some(catalog.clone()),
        }
    }

    pub fn essential_categories(&self) -> Option<Vec<Category>> {
        self.essential_categories
            .as_ref()
            .map(|slugs| slugs.iter().map(|s| Category::from(s.as_str())).collect())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;
    config.base_dir = path.parent().map(Path::to_path_buf);

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: format: {}\n\n💡 Hint: Use 'json' or 'markdown'.", e);
        }
    }

    if let Some(ref fail_on) = config.fail_on {
        if let Err(e) = FailThreshold::from_str(fail_on) {
            bail!(
                "Invalid config: fail_on: {}\n\n💡 Hint: Use 'warning' or 'incompatible'.",
                e
            );
        }
    }

    if let Some(ref catalog) = config.catalog {
        if catalog.as_os_str().is_empty() {
            bail!("Invalid config: catalog must not be empty.\n\n💡 Hint: Give the path of a JSON or TOML catalog file.");
        }
    }

    if let Some(ref categories) = config.essential_categories {
        for (i, slug) in categories.iter().enumerate() {
            if slug.trim().is_empty() {
                bail!(
                    "Invalid config: essential_categories[{}] must not be empty.\n\n\
                     💡 Hint: Use category slugs such as \"cpu\", \"ram\" or \"psu\".",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
