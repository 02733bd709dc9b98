//! Catalog listing read model

use crate::compatibility::services::FilterOptions;
use serde::Serialize;
use std::collections::BTreeMap;

/// One page of a catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub components: Vec<CatalogEntryView>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub total_pages: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub compatible_with: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_options: Option<FilterOptions>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntryView {
    pub id: String,
    pub category: String,
    pub brand: String,
    pub name: String,
    pub model: String,
    pub price: f64,
    pub power_draw: Option<u32>,
    pub form_factor: Option<String>,
    pub stock: String,
    /// Rule-relevant attributes rendered as text (socket, memory type, ...)
    pub highlights: BTreeMap<String, String>,
}
