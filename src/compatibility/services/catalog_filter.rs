use crate::compatibility::domain::specs::{INTERFACE, MEMORY_TYPE, SOCKET};
use crate::compatibility::domain::{Category, ComponentRecord, StockStatus};
use crate::compatibility::policies::{FormFactorPolicy, MemoryPolicy, SocketPolicy};
use crate::shared::error::ConfiguratorError;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeSet;

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Browse criteria for the catalog. Empty lists and `None` mean "any".
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentFilter {
    pub category: Option<Category>,
    pub brands: Vec<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub only_in_stock: bool,
    pub form_factors: Vec<String>,
    pub power_max: Option<u32>,
    pub search: Option<String>,
    pub sockets: Vec<String>,
    pub memory_types: Vec<String>,
    pub interfaces: Vec<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ComponentFilter {
    fn default() -> Self {
        Self {
            category: None,
            brands: Vec::new(),
            price_min: None,
            price_max: None,
            only_in_stock: false,
            form_factors: Vec::new(),
            power_max: None,
            search: None,
            sockets: Vec::new(),
            memory_types: Vec::new(),
            interfaces: Vec::new(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ComponentFilter {
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(ConfiguratorError::Validation {
                message: "Page numbers start at 1".to_string(),
            }
            .into());
        }
        if self.limit == 0 || self.limit > MAX_PAGE_LIMIT {
            return Err(ConfiguratorError::Validation {
                message: format!(
                    "Page limit must be between 1 and {} (got {})",
                    MAX_PAGE_LIMIT, self.limit
                ),
            }
            .into());
        }
        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(ConfiguratorError::Validation {
                    message: format!("Minimum price {} is above maximum price {}", min, max),
                }
                .into());
            }
        }
        Ok(())
    }

    fn matches(&self, record: &ComponentRecord) -> bool {
        if let Some(category) = &self.category {
            if record.category() != category {
                return false;
            }
        }
        if !self.brands.is_empty() && !self.brands.iter().any(|b| b == record.brand()) {
            return false;
        }
        if self.price_min.is_some_and(|min| record.price() < min) {
            return false;
        }
        if self.price_max.is_some_and(|max| record.price() > max) {
            return false;
        }
        if self.only_in_stock
            && record.stock().map(|s| s.status) != Some(StockStatus::InStock)
        {
            return false;
        }
        if !self.form_factors.is_empty()
            && !record
                .form_factor()
                .is_some_and(|ff| self.form_factors.iter().any(|f| f == ff))
        {
            return false;
        }
        if let (Some(max), Some(watts)) = (self.power_max, record.power_draw()) {
            if watts > max {
                return false;
            }
        }
        if let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            let found = [record.name(), record.model(), record.brand()]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !found {
                return false;
            }
        }
        Self::attribute_in(record, SOCKET, &self.sockets)
            && Self::attribute_in(record, MEMORY_TYPE, &self.memory_types)
            && Self::attribute_in(record, INTERFACE, &self.interfaces)
    }

    fn attribute_in(record: &ComponentRecord, key: &str, wanted: &[String]) -> bool {
        wanted.is_empty()
            || record
                .attributes()
                .text_list(key)
                .iter()
                .any(|value| wanted.contains(value))
    }
}

/// One page of filtered catalog records
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredPage {
    pub items: Vec<ComponentRecord>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

impl FilteredPage {
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.limit.max(1) as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Distinct values available for each browse filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub form_factors: Vec<String>,
    pub sockets: Vec<String>,
    pub memory_types: Vec<String>,
    pub interfaces: Vec<String>,
    pub price_range: PriceRange,
}

/// CatalogFilter service for browsing and narrowing the catalog
pub struct CatalogFilter;

impl CatalogFilter {
    /// Filters records and returns the requested page, preserving catalog order
    pub fn apply(records: &[ComponentRecord], filter: &ComponentFilter) -> Result<FilteredPage> {
        filter.validate()?;

        let matching: Vec<&ComponentRecord> =
            records.iter().filter(|r| filter.matches(r)).collect();
        let offset = (filter.page as usize - 1).saturating_mul(filter.limit as usize);

        Ok(FilteredPage {
            total: matching.len(),
            items: matching
                .into_iter()
                .skip(offset)
                .take(filter.limit as usize)
                .cloned()
                .collect(),
            page: filter.page,
            limit: filter.limit,
        })
    }

    pub fn filter_options(records: &[ComponentRecord]) -> FilterOptions {
        let mut brands = BTreeSet::new();
        let mut form_factors = BTreeSet::new();
        let mut sockets = BTreeSet::new();
        let mut memory_types = BTreeSet::new();
        let mut interfaces = BTreeSet::new();

        for record in records {
            if !record.brand().is_empty() {
                brands.insert(record.brand().to_string());
            }
            if let Some(ff) = record.form_factor() {
                form_factors.insert(ff.to_string());
            }
            let attributes = record.attributes();
            sockets.extend(attributes.text_list(SOCKET));
            memory_types.extend(attributes.text_list(MEMORY_TYPE));
            interfaces.extend(attributes.text_list(INTERFACE));
        }

        let price_range = records
            .iter()
            .map(ComponentRecord::price)
            .fold(None, |acc: Option<PriceRange>, price| {
                Some(match acc {
                    Some(range) => PriceRange {
                        min: range.min.min(price),
                        max: range.max.max(price),
                    },
                    None => PriceRange {
                        min: price,
                        max: price,
                    },
                })
            })
            .unwrap_or(PriceRange { min: 0.0, max: 0.0 });

        FilterOptions {
            brands: brands.into_iter().collect(),
            form_factors: form_factors.into_iter().collect(),
            sockets: sockets.into_iter().collect(),
            memory_types: memory_types.into_iter().collect(),
            interfaces: interfaces.into_iter().collect(),
            price_range,
        }
    }

    /// Records of `category` that fit every already-selected record
    pub fn compatible_candidates(
        records: &[ComponentRecord],
        category: &Category,
        selected: &[ComponentRecord],
    ) -> Vec<ComponentRecord> {
        records
            .iter()
            .filter(|candidate| candidate.category() == category)
            .filter(|candidate| selected.iter().all(|s| Self::compatible_pair(candidate, s)))
            .cloned()
            .collect()
    }

    /// Basic pairwise check; pairs no rule covers are compatible
    pub fn compatible_pair(a: &ComponentRecord, b: &ComponentRecord) -> bool {
        match (a.category(), b.category()) {
            (Category::Cpu, Category::Motherboard) => SocketPolicy::is_compatible(a, b),
            (Category::Motherboard, Category::Cpu) => SocketPolicy::is_compatible(b, a),
            (Category::Motherboard, Category::Ram) => MemoryPolicy::is_compatible(a, b),
            (Category::Ram, Category::Motherboard) => MemoryPolicy::is_compatible(b, a),
            (Category::Case, Category::Motherboard) => FormFactorPolicy::is_compatible(a, b),
            (Category::Motherboard, Category::Case) => FormFactorPolicy::is_compatible(b, a),
            _ => true,
        }
    }
}
