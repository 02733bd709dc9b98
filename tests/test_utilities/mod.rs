//! Shared helpers for integration tests
#![allow(dead_code)]

pub mod mocks;

use pc_configurator::prelude::*;

pub fn id(value: &str) -> ComponentId {
    ComponentId::new(value).unwrap()
}

pub fn record(value: &str, category: Category, price: f64) -> ComponentRecord {
    ComponentRecord::new(id(value), category, price).unwrap()
}

pub fn cpu(value: &str, socket: &str, watts: u32) -> ComponentRecord {
    record(value, Category::Cpu, 300.0)
        .with_identity("AMD", value, value)
        .with_power_draw(Some(watts))
        .with_attributes(SpecMap::new().with("socket", socket))
}

pub fn motherboard(value: &str, socket: &str, memory: &str, form_factor: &str) -> ComponentRecord {
    record(value, Category::Motherboard, 180.0)
        .with_identity("ASUS", value, value)
        .with_power_draw(Some(50))
        .with_form_factor(Some(form_factor.to_string()))
        .with_attributes(
            SpecMap::new()
                .with("socket", socket)
                .with("memory_type", vec![memory])
                .with("max_memory_gb", 128u32)
                .with("memory_slots", 4u32),
        )
}

pub fn ram(value: &str, memory: &str, capacity_gb: u32) -> ComponentRecord {
    record(value, Category::Ram, 60.0)
        .with_identity("Kingston", value, value)
        .with_power_draw(Some(5))
        .with_attributes(
            SpecMap::new()
                .with("memory_type", memory)
                .with("capacity_gb", capacity_gb),
        )
}

pub fn case(value: &str, form_factors: Vec<&str>) -> ComponentRecord {
    record(value, Category::Case, 90.0)
        .with_identity("Fractal", value, value)
        .with_attributes(SpecMap::new().with("supported_form_factors", form_factors))
}

pub fn psu(value: &str, wattage: u32) -> ComponentRecord {
    record(value, Category::Psu, 120.0)
        .with_identity("Seasonic", value, value)
        .with_attributes(SpecMap::new().with("wattage", wattage))
}

pub fn gpu(value: &str, watts: u32) -> ComponentRecord {
    record(value, Category::Gpu, 600.0)
        .with_identity("NVIDIA", value, value)
        .with_power_draw(Some(watts))
}
