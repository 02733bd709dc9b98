use std::path::Path;
use pc_configurator::prelude::*;

/// Mock BuildReader for testing
pub struct MockBuildReader {
    pub build: Option<BuildConfiguration>,
}

impl MockBuildReader {
    pub fn new(build: BuildConfiguration) -> Self {
        Self { build: Some(build) }
    }

    /// Build with one item per `(id, quantity)` pair
    pub fn with_items(items: &[(&str, u32)]) -> Self {
        let items = items
            .iter()
            .map(|(id, quantity)| BuildItem::new(ComponentId::new(*id).unwrap(), *quantity).unwrap())
            .collect();
        Self::new(BuildConfiguration::new("Test build", None, items).unwrap())
    }

    pub fn with_failure() -> Self {
        Self { build: None }
    }
}

impl BuildReader for MockBuildReader {
    fn read_build(&self, _path: &Path) -> Result<BuildConfiguration> {
        match &self.build {
            Some(build) => Ok(build.clone()),
            None => anyhow::bail!("Mock build read failure"),
        }
    }
}
