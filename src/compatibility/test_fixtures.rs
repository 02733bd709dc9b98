//! Record builders shared by the unit tests of the compatibility module.

use crate::compatibility::domain::specs::{
    CAPACITY_GB, MAX_MEMORY_GB, MEMORY_SLOTS, MEMORY_TYPE, SOCKET, SUPPORTED_FORM_FACTORS, WATTAGE,
};
use crate::compatibility::domain::{Category, ComponentId, ComponentRecord, SpecMap, SpecValue};

pub fn id(value: &str) -> ComponentId {
    ComponentId::new(value).unwrap()
}

pub fn part(value: &str, category: Category, power: Option<u32>) -> ComponentRecord {
    ComponentRecord::new(id(value), category, 100.0)
        .unwrap()
        .with_power_draw(power)
}

pub fn cpu(value: &str, socket: &str) -> ComponentRecord {
    part(value, Category::Cpu, None).with_attributes(SpecMap::new().with(SOCKET, socket))
}

pub fn motherboard(
    value: &str,
    socket: &str,
    memory_types: Vec<&str>,
    max_memory_gb: u32,
    memory_slots: u32,
    form_factor: &str,
) -> ComponentRecord {
    part(value, Category::Motherboard, None)
        .with_form_factor(Some(form_factor.to_string()))
        .with_attributes(
            SpecMap::new()
                .with(SOCKET, socket)
                .with(MEMORY_TYPE, memory_types)
                .with(MAX_MEMORY_GB, max_memory_gb)
                .with(MEMORY_SLOTS, memory_slots),
        )
}

pub fn ram(value: &str, memory_type: &str, capacity_gb: u32) -> ComponentRecord {
    part(value, Category::Ram, None).with_attributes(
        SpecMap::new()
            .with(MEMORY_TYPE, memory_type)
            .with(CAPACITY_GB, capacity_gb),
    )
}

pub fn case(value: &str, form_factors: Vec<&str>) -> ComponentRecord {
    part(value, Category::Case, None)
        .with_attributes(SpecMap::new().with(SUPPORTED_FORM_FACTORS, form_factors))
}

pub fn psu(value: &str, wattage: u32) -> ComponentRecord {
    part(value, Category::Psu, None).with_attributes(SpecMap::new().with(WATTAGE, wattage))
}

pub fn psu_without_wattage(value: &str) -> ComponentRecord {
    part(value, Category::Psu, None)
        .with_attributes(SpecMap::new().with("efficiency", SpecValue::from("80+ Gold")))
}
