use super::component::{ComponentId, ComponentRecord};
use crate::shared::error::ConfiguratorError;
use crate::shared::Result;

/// Upper bound on units per build line
pub const MAX_QUANTITY: u32 = 64;

/// One line of a build: a catalog id with a quantity
#[derive(Debug, Clone, PartialEq)]
pub struct BuildItem {
    component_id: ComponentId,
    quantity: u32,
    price_snapshot: Option<f64>,
    notes: Option<String>,
}

impl BuildItem {
    pub fn new(component_id: ComponentId, quantity: u32) -> Result<Self> {
        if quantity == 0 {
            return Err(ConfiguratorError::Validation {
                message: format!("Quantity for '{}' must be at least 1", component_id),
            }
            .into());
        }
        if quantity > MAX_QUANTITY {
            return Err(ConfiguratorError::Validation {
                message: format!(
                    "Quantity for '{}' must be at most {} (got {})",
                    component_id, MAX_QUANTITY, quantity
                ),
            }
            .into());
        }

        Ok(Self {
            component_id,
            quantity,
            price_snapshot: None,
            notes: None,
        })
    }

    pub fn with_price_snapshot(mut self, price: Option<f64>) -> Result<Self> {
        if let Some(p) = price {
            if !p.is_finite() || p < 0.0 {
                return Err(ConfiguratorError::Validation {
                    message: format!(
                        "Price snapshot for '{}' must be a non-negative number",
                        self.component_id
                    ),
                }
                .into());
            }
        }
        self.price_snapshot = price;
        Ok(self)
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn component_id(&self) -> &ComponentId {
        &self.component_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price_snapshot(&self) -> Option<f64> {
        self.price_snapshot
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// A named PC build as read from a build file
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfiguration {
    name: String,
    description: Option<String>,
    items: Vec<BuildItem>,
}

impl BuildConfiguration {
    pub fn new(name: impl Into<String>, description: Option<String>, items: Vec<BuildItem>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfiguratorError::Validation {
                message: "Build name cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            name,
            description,
            items,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn items(&self) -> &[BuildItem] {
        &self.items
    }
}

/// A build item joined with its catalog record
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedItem {
    pub record: ComponentRecord,
    pub quantity: u32,
    pub price_snapshot: Option<f64>,
    pub notes: Option<String>,
}

impl ResolvedItem {
    pub fn new(record: ComponentRecord, item: &BuildItem) -> Self {
        Self {
            record,
            quantity: item.quantity(),
            price_snapshot: item.price_snapshot(),
            notes: item.notes().map(str::to_string),
        }
    }

    /// Snapshot price wins over the current catalog price
    pub fn unit_price(&self) -> f64 {
        self.price_snapshot.unwrap_or_else(|| self.record.price())
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }
}
