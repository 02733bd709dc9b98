//! Typed views over the free-form specification map.
//!
//! Rules match on `ComponentSpecs` instead of probing string keys. Every
//! field is optional (or an empty list) and a missing value means
//! "no constraint".

use super::category::Category;
use super::spec_value::SpecMap;

pub const SOCKET: &str = "socket";
pub const MEMORY_TYPE: &str = "memory_type";
pub const CAPACITY_GB: &str = "capacity_gb";
pub const MAX_MEMORY_GB: &str = "max_memory_gb";
pub const MEMORY_SLOTS: &str = "memory_slots";
pub const SUPPORTED_FORM_FACTORS: &str = "supported_form_factors";
pub const WATTAGE: &str = "wattage";
pub const INTERFACE: &str = "interface";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CpuSpecs {
    pub socket: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MotherboardSpecs {
    pub socket: Option<String>,
    pub memory_types: Vec<String>,
    pub max_memory_gb: Option<u32>,
    pub memory_slots: Option<u32>,
    pub form_factor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RamSpecs {
    /// Usually one entry; lists are accepted for kits sold in several variants
    pub memory_types: Vec<String>,
    /// Kept fractional so that totals are summed before any rounding
    pub capacity_gb: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseSpecs {
    pub supported_form_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PsuSpecs {
    pub wattage: Option<u32>,
}

/// Category-specific specification of a component
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentSpecs {
    Cpu(CpuSpecs),
    Motherboard(MotherboardSpecs),
    Ram(RamSpecs),
    Case(CaseSpecs),
    Psu(PsuSpecs),
    /// Categories no rule inspects (gpu, storage, cooler, ...)
    Other,
}

impl ComponentSpecs {
    /// Projects a raw attribute map onto the typed view for `category`.
    pub fn project(category: &Category, attributes: &SpecMap, form_factor: Option<&str>) -> Self {
        let text = |key: &str| attributes.text(key).map(str::to_string);

        match category {
            Category::Cpu => ComponentSpecs::Cpu(CpuSpecs {
                socket: text(SOCKET),
            }),
            Category::Motherboard => ComponentSpecs::Motherboard(MotherboardSpecs {
                socket: text(SOCKET),
                memory_types: attributes.text_list(MEMORY_TYPE),
                max_memory_gb: attributes.count(MAX_MEMORY_GB),
                memory_slots: attributes.count(MEMORY_SLOTS),
                form_factor: form_factor.map(str::to_string),
            }),
            Category::Ram => ComponentSpecs::Ram(RamSpecs {
                memory_types: attributes.text_list(MEMORY_TYPE),
                capacity_gb: attributes.number(CAPACITY_GB),
            }),
            Category::Case => ComponentSpecs::Case(CaseSpecs {
                supported_form_factors: attributes.text_list(SUPPORTED_FORM_FACTORS),
            }),
            Category::Psu => ComponentSpecs::Psu(PsuSpecs {
                wattage: attributes.count(WATTAGE),
            }),
            _ => ComponentSpecs::Other,
        }
    }

    pub fn as_cpu(&self) -> Option<&CpuSpecs> {
        match self {
            ComponentSpecs::Cpu(specs) => Some(specs),
            _ => None,
        }
    }

    pub fn as_motherboard(&self) -> Option<&MotherboardSpecs> {
        match self {
            ComponentSpecs::Motherboard(specs) => Some(specs),
            _ => None,
        }
    }

    pub fn as_ram(&self) -> Option<&RamSpecs> {
        match self {
            ComponentSpecs::Ram(specs) => Some(specs),
            _ => None,
        }
    }

    pub fn as_case(&self) -> Option<&CaseSpecs> {
        match self {
            ComponentSpecs::Case(specs) => Some(specs),
            _ => None,
        }
    }

    pub fn as_psu(&self) -> Option<&PsuSpecs> {
        match self {
            ComponentSpecs::Psu(specs) => Some(specs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::domain::spec_value::SpecValue;

    #[test]
    fn test_project_motherboard() {
        let attributes = SpecMap::new()
            .with(SOCKET, "AM4")
            .with(MEMORY_TYPE, "DDR4")
            .with(MAX_MEMORY_GB, 128u32)
            .with(MEMORY_SLOTS, 4u32);

        let specs = ComponentSpecs::project(&Category::Motherboard, &attributes, Some("ATX"));
        let board = specs.as_motherboard().unwrap();

        assert_eq!(board.socket.as_deref(), Some("AM4"));
        assert_eq!(board.memory_types, vec!["DDR4"]);
        assert_eq!(board.max_memory_gb, Some(128));
        assert_eq!(board.memory_slots, Some(4));
        assert_eq!(board.form_factor.as_deref(), Some("ATX"));
    }

    #[test]
    fn test_project_ram_with_list_type() {
        let attributes = SpecMap::new()
            .with(MEMORY_TYPE, vec!["DDR5"])
            .with(CAPACITY_GB, SpecValue::Number(16.0));

        let specs = ComponentSpecs::project(&Category::Ram, &attributes, None);
        let ram = specs.as_ram().unwrap();
        assert_eq!(ram.memory_types, vec!["DDR5"]);
        assert_eq!(ram.capacity_gb, Some(16.0));
    }

    #[test]
    fn test_project_missing_keys_are_unconstrained() {
        let specs = ComponentSpecs::project(&Category::Psu, &SpecMap::new(), None);
        assert_eq!(specs.as_psu().unwrap().wattage, None);

        let specs = ComponentSpecs::project(&Category::Case, &SpecMap::new(), None);
        assert!(specs.as_case().unwrap().supported_form_factors.is_empty());
    }

    #[test]
    fn test_project_unchecked_category() {
        let attributes = SpecMap::new().with(INTERFACE, "NVMe");
        let specs = ComponentSpecs::project(&Category::Storage, &attributes, None);
        assert_eq!(specs, ComponentSpecs::Other);
        assert!(specs.as_cpu().is_none());
    }
}
