use crate::compatibility::domain::{
    AvailabilityStatus, Category, ConfigurationSummary, ResolvedItem, StockStatus,
};
use std::collections::HashSet;

/// ConfigurationSummarizer service for aggregate build figures
///
/// Price and power honour item quantities. An item whose record carries no
/// stock information counts as out of stock.
pub struct ConfigurationSummarizer;

impl ConfigurationSummarizer {
    pub fn summarize(items: &[ResolvedItem], essential: &[Category]) -> ConfigurationSummary {
        let missing_categories = Self::missing_categories(items, essential);
        if items.is_empty() {
            return ConfigurationSummary::empty(missing_categories);
        }

        let total_price = items.iter().map(ResolvedItem::line_total).sum();

        ConfigurationSummary {
            total_price,
            total_power_consumption: Self::total_power(items),
            availability: Self::availability(items),
            expected_delivery_date: items
                .iter()
                .filter_map(|item| item.record.stock().and_then(|s| s.expected_date))
                .max(),
            missing_categories,
            item_count: items
                .iter()
                .fold(0u32, |acc, item| acc.saturating_add(item.quantity)),
        }
    }

    /// All in stock: available. Any in stock or expected: partial.
    pub fn availability(items: &[ResolvedItem]) -> AvailabilityStatus {
        if items.is_empty() {
            return AvailabilityStatus::Unknown;
        }

        let statuses: Vec<StockStatus> = items
            .iter()
            .map(|item| {
                item.record
                    .stock()
                    .map(|stock| stock.status)
                    .unwrap_or(StockStatus::OutOfStock)
            })
            .collect();

        if statuses.iter().all(|s| *s == StockStatus::InStock) {
            AvailabilityStatus::Available
        } else if statuses
            .iter()
            .any(|s| matches!(s, StockStatus::InStock | StockStatus::Expected))
        {
            AvailabilityStatus::Partial
        } else {
            AvailabilityStatus::Unavailable
        }
    }

    /// Essential categories with no item, in the order given
    pub fn missing_categories(items: &[ResolvedItem], essential: &[Category]) -> Vec<Category> {
        let present: HashSet<&Category> = items.iter().map(|item| item.record.category()).collect();
        essential
            .iter()
            .filter(|category| !present.contains(category))
            .cloned()
            .collect()
    }

    fn total_power(items: &[ResolvedItem]) -> Option<u32> {
        items
            .iter()
            .filter_map(|item| {
                item.record
                    .power_draw()
                    .map(|watts| watts.saturating_mul(item.quantity))
            })
            .fold(None, |acc: Option<u32>, watts| {
                Some(acc.unwrap_or(0).saturating_add(watts))
            })
    }
}
