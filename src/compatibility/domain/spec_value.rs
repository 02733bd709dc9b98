use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One value of a component's free-form specification map.
///
/// Catalog files are written by hand or exported from other tools, so the
/// same key can arrive as a string in one record and a list in the next.
/// Accessors normalise instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<SpecValue>),
    Table(BTreeMap<String, SpecValue>),
    Null,
}

impl SpecValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SpecValue::Text(text) if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    /// A single string becomes a one-element list; non-string items are skipped.
    pub fn as_text_list(&self) -> Vec<String> {
        match self {
            SpecValue::List(items) => items
                .iter()
                .filter_map(|item| item.as_text().map(str::to_string))
                .collect(),
            other => other.as_text().map(|t| vec![t.to_string()]).unwrap_or_default(),
        }
    }

    /// Non-negative finite number, numeric strings included.
    pub fn as_number(&self) -> Option<f64> {
        let number = match self {
            SpecValue::Number(n) => *n,
            SpecValue::Text(text) => text.trim().parse::<f64>().ok()?,
            _ => return None,
        };

        (number.is_finite() && number >= 0.0).then_some(number)
    }

    /// Non-negative whole quantity; fractional parts are truncated.
    pub fn as_count(&self) -> Option<u32> {
        self.as_number()
            .map(|number| number.min(u32::MAX as f64) as u32)
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Flag(true) => write!(f, "yes"),
            SpecValue::Flag(false) => write!(f, "no"),
            SpecValue::Number(n) => write!(f, "{}", n),
            SpecValue::Text(text) => write!(f, "{}", text),
            SpecValue::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(", "))
            }
            SpecValue::Table(table) => {
                let parts: Vec<String> =
                    table.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                write!(f, "{}", parts.join(", "))
            }
            SpecValue::Null => Ok(()),
        }
    }
}

impl From<&str> for SpecValue {
    fn from(text: &str) -> Self {
        SpecValue::Text(text.to_string())
    }
}

impl From<u32> for SpecValue {
    fn from(number: u32) -> Self {
        SpecValue::Number(f64::from(number))
    }
}

impl From<Vec<&str>> for SpecValue {
    fn from(items: Vec<&str>) -> Self {
        SpecValue::List(items.into_iter().map(SpecValue::from).collect())
    }
}

/// Specification map of a component (`socket`, `memory_type`, `wattage`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecMap(BTreeMap<String, SpecValue>);

impl SpecMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures
    pub fn with(mut self, key: &str, value: impl Into<SpecValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(SpecValue::as_text)
    }

    pub fn text_list(&self, key: &str) -> Vec<String> {
        self.get(key).map(SpecValue::as_text_list).unwrap_or_default()
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(SpecValue::as_number)
    }

    pub fn count(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(SpecValue::as_count)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
