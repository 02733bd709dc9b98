use crate::compatibility::domain::{
    BuildConfiguration, BuildItem, Category, ComponentId, ComponentRecord, SpecMap, StockInfo,
};
use crate::ports::outbound::{BuildReader, CatalogReader};
use crate::shared::error::ConfiguratorError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// FileSystemReader adapter for reading catalog and build files
///
/// This adapter implements both CatalogReader and BuildReader ports.
/// Catalogs are JSON or TOML (chosen by extension); builds are YAML, which
/// also accepts plain JSON documents.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => CatalogFormat::Toml,
            _ => CatalogFormat::Json,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    components: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    category: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    model: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    #[serde(default, alias = "power_consumption")]
    power_draw: Option<u32>,
    #[serde(default)]
    form_factor: Option<String>,
    #[serde(default, alias = "attributes")]
    specifications: SpecMap,
    #[serde(default)]
    stock: Option<StockInfo>,
}

impl TryFrom<CatalogEntry> for ComponentRecord {
    type Error = anyhow::Error;

    fn try_from(entry: CatalogEntry) -> Result<Self> {
        let id = ComponentId::new(entry.id.as_str()).map_err(|e| {
            ConfiguratorError::InvalidComponent {
                id: entry.id.clone(),
                reason: e.to_string(),
            }
        })?;

        let record = ComponentRecord::new(id, Category::from(entry.category), entry.price)?
            .with_identity(entry.brand, entry.name, entry.model)
            .with_description(entry.description)
            .with_power_draw(entry.power_draw)
            .with_form_factor(entry.form_factor)
            .with_attributes(entry.specifications)
            .with_stock(entry.stock);

        Ok(record)
    }
}

#[derive(Debug, Deserialize)]
struct BuildDocument {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    items: Vec<BuildEntry>,
}

#[derive(Debug, Deserialize)]
struct BuildEntry {
    component_id: String,
    #[serde(default = "default_quantity")]
    quantity: u32,
    #[serde(default)]
    price_snapshot: Option<f64>,
    #[serde(default)]
    notes: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl CatalogReader for FileSystemReader {
    fn read_catalog(&self, path: &Path) -> Result<Vec<ComponentRecord>> {
        if !path.exists() {
            return Err(ConfiguratorError::CatalogNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass an existing file with --catalog or set `catalog` in pc-configurator.config.yml".to_string(),
            }
            .into());
        }

        let content = read_checked(path, "catalog file")?;
        let parse_error = |details: String| ConfiguratorError::CatalogParseError {
            path: path.to_path_buf(),
            details,
        };

        let document: CatalogDocument = match CatalogFormat::from_path(path) {
            CatalogFormat::Json => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            CatalogFormat::Toml => {
                toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
        };

        document
            .components
            .into_iter()
            .map(ComponentRecord::try_from)
            .collect()
    }
}

impl BuildReader for FileSystemReader {
    fn read_build(&self, path: &Path) -> Result<BuildConfiguration> {
        let content = read_checked(path, "build file")?;
        let parse_error = |details: String| ConfiguratorError::BuildParseError {
            path: path.to_path_buf(),
            details,
        };

        let document: BuildDocument =
            serde_yaml_ng::from_str(&content).map_err(|e| parse_error(e.to_string()))?;

        let items = document
            .items
            .into_iter()
            .map(|entry| {
                let id = ComponentId::new(entry.component_id)?;
                Ok(BuildItem::new(id, entry.quantity)?
                    .with_price_snapshot(entry.price_snapshot)?
                    .with_notes(entry.notes))
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|e| parse_error(e.to_string()))?;

        BuildConfiguration::new(document.name, document.description, items)
            .map_err(|e| parse_error(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::domain::StockStatus;
    use std::fs;
    use tempfile::TempDir;

    const JSON_CATALOG: &str = r#"{
        "components": [
            {
                "id": "cpu-7800x3d",
                "category": "cpu",
                "brand": "AMD",
                "name": "Ryzen 7 7800X3D",
                "model": "100-100000910WOF",
                "price": 449.0,
                "power_consumption": 120,
                "specifications": { "socket": "AM5", "cores": 8 },
                "stock": { "status": "in_stock", "quantity": 12 }
            },
            {
                "id": "case-h5",
                "category": "case",
                "price": 89.9,
                "form_factor": "ATX",
                "specifications": { "supported_form_factors": ["ATX", "Micro-ATX"] },
                "stock": { "status": "expected", "expected_date": "2026-11-20" }
            }
        ]
    }"#;

    const TOML_CATALOG: &str = r#"
[[components]]
id = "psu-850"
category = "psu"
brand = "Seasonic"
name = "Focus GX-850"
price = 139.0

[components.specifications]
wattage = 850
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_json_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "catalog.json", JSON_CATALOG);

        let records = FileSystemReader::new().read_catalog(&path).unwrap();
        assert_eq!(records.len(), 2);

        let cpu = &records[0];
        assert_eq!(cpu.category(), &Category::Cpu);
        assert_eq!(cpu.power_draw(), Some(120));
        assert_eq!(cpu.attributes().text("socket"), Some("AM5"));
        assert_eq!(cpu.stock().unwrap().status, StockStatus::InStock);

        let case = &records[1];
        assert_eq!(case.form_factor(), Some("ATX"));
        assert!(case.stock().unwrap().expected_date.is_some());
    }

    #[test]
    fn test_read_toml_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "catalog.toml", TOML_CATALOG);

        let records = FileSystemReader::new().read_catalog(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category(), &Category::Psu);
        assert_eq!(records[0].attributes().count("wattage"), Some(850));
    }

    #[test]
    fn test_missing_catalog() {
        let result = FileSystemReader::new().read_catalog(Path::new("/nonexistent/catalog.json"));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Catalog file not found"));
    }

    #[test]
    fn test_malformed_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "catalog.json", "{ not json");

        let err = FileSystemReader::new()
            .read_catalog(&path)
            .unwrap_err()
            .to_string();
        assert!(err.contains("Failed to parse catalog file"));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "catalog.json",
            r#"{"components": [{"id": "gpu-1", "category": "gpu", "price": -5}]}"#,
        );

        let err = FileSystemReader::new()
            .read_catalog(&path)
            .unwrap_err()
            .to_string();
        assert!(err.contains("gpu-1"));
        assert!(err.contains("price"));
    }

    #[test]
    fn test_read_build() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "build.yml",
            "name: Gaming rig\nitems:\n  - component_id: cpu-7800x3d\n  - component_id: ram-32\n    quantity: 2\n    price_snapshot: 99.5\n    notes: matched pair\n",
        );

        let build = FileSystemReader::new().read_build(&path).unwrap();
        assert_eq!(build.name(), "Gaming rig");
        assert_eq!(build.items().len(), 2);
        assert_eq!(build.items()[0].quantity(), 1);
        assert_eq!(build.items()[1].quantity(), 2);
        assert_eq!(build.items()[1].price_snapshot(), Some(99.5));
        assert_eq!(build.items()[1].notes(), Some("matched pair"));
    }

    #[test]
    fn test_build_accepts_json() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "build.json",
            r#"{"name": "Office", "items": [{"component_id": "cpu-1"}]}"#,
        );

        let build = FileSystemReader::new().read_build(&path).unwrap();
        assert_eq!(build.name(), "Office");
        assert_eq!(build.items().len(), 1);
        assert_eq!(build.items()[0].component_id().as_str(), "cpu-1");
    }

    #[test]
    fn test_build_with_zero_quantity_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "build.yml",
            "name: Broken\nitems:\n  - component_id: cpu-1\n    quantity: 0\n",
        );

        let err = FileSystemReader::new()
            .read_build(&path)
            .unwrap_err()
            .to_string();
        assert!(err.contains("Failed to parse build file"));
    }

    #[test]
    fn test_build_with_oversized_quantity_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "build.yml",
            "name: Hoard\nitems:\n  - component_id: ram-kingston-32\n    quantity: 4000000000\n",
        );

        let err = FileSystemReader::new()
            .read_build(&path)
            .unwrap_err()
            .to_string();
        assert!(err.contains("Failed to parse build file"));
        assert!(err.contains("at most 64"));
    }

    #[test]
    fn test_build_without_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "build.yml", "items: []\n");

        let err = FileSystemReader::new()
            .read_build(&path)
            .unwrap_err()
            .to_string();
        assert!(err.contains("name"));
    }
}
