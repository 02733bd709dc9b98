use super::category::Category;
use super::component::ComponentRecord;
use std::collections::HashMap;

/// Resolved records partitioned by category.
///
/// Order inside a category follows the input order; order across categories
/// carries no meaning.
#[derive(Debug, Default)]
pub struct ComponentGroups<'a> {
    by_category: HashMap<Category, Vec<&'a ComponentRecord>>,
}

impl<'a> ComponentGroups<'a> {
    pub fn from_records(records: &'a [ComponentRecord]) -> Self {
        let mut by_category: HashMap<Category, Vec<&'a ComponentRecord>> = HashMap::new();
        for record in records {
            by_category
                .entry(record.category().clone())
                .or_default()
                .push(record);
        }
        Self { by_category }
    }

    pub fn get(&self, category: &Category) -> &[&'a ComponentRecord] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The record of a category when exactly one is present
    pub fn single(&self, category: &Category) -> Option<&'a ComponentRecord> {
        match self.get(category) {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn count(&self, category: &Category) -> usize {
        self.get(category).len()
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.count(category) > 0
    }
}
