use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag of a catalog component.
///
/// The known vocabulary maps to dedicated variants; any other tag is kept
/// verbatim in `Other` so catalogs with extra categories still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Cpu,
    Motherboard,
    Ram,
    Gpu,
    Storage,
    Psu,
    Case,
    Cooler,
    Accessories,
    Other(String),
}

impl Category {
    /// Categories a complete PC build must contain
    pub const ESSENTIAL: [Category; 7] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Ram,
        Category::Storage,
        Category::Gpu,
        Category::Psu,
        Category::Case,
    ];

    /// Lowercase slug used in catalog files
    pub fn slug(&self) -> &str {
        match self {
            Category::Cpu => "cpu",
            Category::Motherboard => "motherboard",
            Category::Ram => "ram",
            Category::Gpu => "gpu",
            Category::Storage => "storage",
            Category::Psu => "psu",
            Category::Case => "case",
            Category::Cooler => "cooler",
            Category::Accessories => "accessories",
            Category::Other(slug) => slug,
        }
    }

    /// Human-readable name for reports
    pub fn display_name(&self) -> &str {
        match self {
            Category::Cpu => "Processor",
            Category::Motherboard => "Motherboard",
            Category::Ram => "Memory",
            Category::Gpu => "Graphics card",
            Category::Storage => "Storage",
            Category::Psu => "Power supply",
            Category::Case => "Case",
            Category::Cooler => "Cooler",
            Category::Accessories => "Accessories",
            Category::Other(slug) => slug,
        }
    }
}

impl From<&str> for Category {
    fn from(slug: &str) -> Self {
        match slug.trim().to_lowercase().as_str() {
            "cpu" => Category::Cpu,
            "motherboard" => Category::Motherboard,
            "ram" => Category::Ram,
            "gpu" => Category::Gpu,
            "storage" => Category::Storage,
            "psu" => Category::Psu,
            "case" => Category::Case,
            "cooler" => Category::Cooler,
            "accessories" => Category::Accessories,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(slug: String) -> Self {
        Category::from(slug.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.slug().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
