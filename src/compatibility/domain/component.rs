use super::category::Category;
use super::spec_value::SpecMap;
use super::specs::ComponentSpecs;
use super::stock::StockInfo;
use crate::shared::error::ConfiguratorError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Maximum length for component identifiers
const MAX_COMPONENT_ID_LENGTH: usize = 255;

/// NewType wrapper for a catalog identifier with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();

        if trimmed.is_empty() {
            return Err(ConfiguratorError::Validation {
                message: "Component id cannot be empty".to_string(),
            }
            .into());
        }

        if trimmed.len() > MAX_COMPONENT_ID_LENGTH {
            return Err(ConfiguratorError::Validation {
                message: format!(
                    "Component id is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_COMPONENT_ID_LENGTH
                ),
            }
            .into());
        }

        if trimmed.chars().any(char::is_control) {
            return Err(ConfiguratorError::Validation {
                message: "Component id contains control characters".to_string(),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ComponentId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        ComponentId::new(value)
    }
}

impl From<ComponentId> for String {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog item as seen by the compatibility engine.
///
/// Brand, name and model are display-only; the rules read `specs()`,
/// `form_factor()` and `power_draw()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRecord {
    id: ComponentId,
    category: Category,
    brand: String,
    name: String,
    model: String,
    description: Option<String>,
    price: f64,
    power_draw: Option<u32>,
    form_factor: Option<String>,
    attributes: SpecMap,
    stock: Option<StockInfo>,
}

impl ComponentRecord {
    pub fn new(id: ComponentId, category: Category, price: f64) -> Result<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(ConfiguratorError::InvalidComponent {
                id: id.to_string(),
                reason: format!("price must be a non-negative number, got {}", price),
            }
            .into());
        }

        Ok(Self {
            id,
            category,
            brand: String::new(),
            name: String::new(),
            model: String::new(),
            description: None,
            price,
            power_draw: None,
            form_factor: None,
            attributes: SpecMap::new(),
            stock: None,
        })
    }

    pub fn with_identity(
        mut self,
        brand: impl Into<String>,
        name: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        self.brand = brand.into();
        self.name = name.into();
        self.model = model.into();
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_power_draw(mut self, watts: Option<u32>) -> Self {
        self.power_draw = watts;
        self
    }

    pub fn with_form_factor(mut self, form_factor: Option<String>) -> Self {
        self.form_factor = form_factor.filter(|f| !f.trim().is_empty());
        self
    }

    pub fn with_attributes(mut self, attributes: SpecMap) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_stock(mut self, stock: Option<StockInfo>) -> Self {
        self.stock = stock;
        self
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn power_draw(&self) -> Option<u32> {
        self.power_draw
    }

    pub fn form_factor(&self) -> Option<&str> {
        self.form_factor.as_deref()
    }

    pub fn attributes(&self) -> &SpecMap {
        &self.attributes
    }

    pub fn stock(&self) -> Option<&StockInfo> {
        self.stock.as_ref()
    }

    /// Typed projection of the attribute map for this record's category
    pub fn specs(&self) -> ComponentSpecs {
        ComponentSpecs::project(&self.category, &self.attributes, self.form_factor())
    }

    /// "Brand Name" for reports, falling back to the id
    pub fn display_label(&self) -> String {
        let label = format!("{} {}", self.brand, self.name);
        let label = label.trim();
        if label.is_empty() {
            self.id.to_string()
        } else {
            label.to_string()
        }
    }
}
