//! Compatibility domain: component model, rule policies and pure services.

pub mod domain;
pub mod policies;
pub mod services;

#[cfg(test)]
pub(crate) mod test_fixtures;
