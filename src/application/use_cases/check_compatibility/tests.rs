use super::*;
use crate::compatibility::domain::specs::{MEMORY_SLOTS, MEMORY_TYPE, SOCKET, WATTAGE};
use crate::compatibility::domain::{
    AvailabilityStatus, BuildItem, Category, IssueKind, SpecMap, StockInfo,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct MockCatalog {
    records: HashMap<String, ComponentRecord>,
}

impl MockCatalog {
    fn new(records: Vec<ComponentRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.id().to_string(), r))
                .collect(),
        }
    }
}

impl ComponentCatalog for MockCatalog {
    fn find(&self, id: &ComponentId) -> Result<Option<ComponentRecord>> {
        Ok(self.records.get(id.as_str()).cloned())
    }

    fn all(&self) -> Result<Vec<ComponentRecord>> {
        Ok(self.records.values().cloned().collect())
    }
}

struct FailingCatalog;

impl ComponentCatalog for FailingCatalog {
    fn find(&self, _id: &ComponentId) -> Result<Option<ComponentRecord>> {
        anyhow::bail!("catalog unavailable")
    }

    fn all(&self) -> Result<Vec<ComponentRecord>> {
        anyhow::bail!("catalog unavailable")
    }
}

struct MockBuildReader {
    build: BuildConfiguration,
}

impl BuildReader for MockBuildReader {
    fn read_build(&self, _path: &Path) -> Result<BuildConfiguration> {
        Ok(self.build.clone())
    }
}

#[derive(Default)]
struct RecordingReporter {
    errors: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, _message: &str) {}
}

fn id(value: &str) -> ComponentId {
    ComponentId::new(value).unwrap()
}

fn record(
    value: &str,
    category: Category,
    attributes: SpecMap,
    power: Option<u32>,
) -> ComponentRecord {
    ComponentRecord::new(id(value), category, 100.0)
        .unwrap()
        .with_attributes(attributes)
        .with_power_draw(power)
        .with_stock(Some(StockInfo::in_stock(10)))
}

fn catalog() -> Vec<ComponentRecord> {
    vec![
        record("cpu-1", Category::Cpu, SpecMap::new().with(SOCKET, "AM5"), Some(105)),
        record(
            "mb-1",
            Category::Motherboard,
            SpecMap::new()
                .with(SOCKET, "AM5")
                .with(MEMORY_TYPE, "DDR5")
                .with(MEMORY_SLOTS, 2u32),
            Some(40),
        ),
        record("ram-1", Category::Ram, SpecMap::new().with(MEMORY_TYPE, "DDR5"), Some(5)),
        record("psu-1", Category::Psu, SpecMap::new().with(WATTAGE, 750u32), None),
    ]
}

fn build(items: Vec<(&str, u32)>) -> BuildConfiguration {
    let items = items
        .into_iter()
        .map(|(value, quantity)| BuildItem::new(id(value), quantity).unwrap())
        .collect();
    BuildConfiguration::new("Test build", None, items).unwrap()
}

fn use_case(
    items: Vec<(&str, u32)>,
) -> CheckCompatibilityUseCase<MockCatalog, MockBuildReader, RecordingReporter> {
    CheckCompatibilityUseCase::new(
        MockCatalog::new(catalog()),
        MockBuildReader {
            build: build(items),
        },
        RecordingReporter::default(),
    )
}

fn request() -> CheckRequest {
    CheckRequest::new(PathBuf::from("build.yml"), Category::ESSENTIAL.to_vec())
}

#[test]
fn test_execute_compatible_build() {
    let use_case = use_case(vec![("cpu-1", 1), ("mb-1", 1), ("ram-1", 2), ("psu-1", 1)]);
    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.verdict.status(), CompatibilityStatus::Compatible);
    assert_eq!(response.verdict.total_power_consumption(), Some(155));
    assert_eq!(response.verdict.recommended_psu_wattage(), Some(186));
    assert_eq!(response.items.len(), 4);
    assert!(response.unresolved.is_empty());
    assert_eq!(response.summary.total_price, 500.0);
    assert_eq!(response.summary.item_count, 5);
    assert_eq!(response.summary.availability, AvailabilityStatus::Available);
    assert_eq!(
        response.summary.missing_categories,
        vec![Category::Storage, Category::Gpu, Category::Case]
    );
    assert!(response.metadata.report_id().starts_with("urn:uuid:"));
}

#[test]
fn test_execute_counts_quantity_as_modules() {
    let use_case = use_case(vec![("mb-1", 1), ("ram-1", 3)]);
    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.verdict.status(), CompatibilityStatus::Incompatible);
    assert_eq!(response.verdict.issues()[0].kind, IssueKind::MemorySlotsExceeded);
}

#[test]
fn test_execute_skips_unknown_components() {
    let use_case = use_case(vec![("cpu-1", 1), ("gpu-missing", 1)]);
    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.unresolved, vec![id("gpu-missing")]);
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.verdict.status(), CompatibilityStatus::Compatible);

    let errors = use_case.progress_reporter.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("gpu-missing"));
}

#[test]
fn test_execute_nothing_resolves_gives_unknown() {
    let use_case = use_case(vec![("nope-1", 1), ("nope-2", 2)]);
    let response = use_case.execute(request()).unwrap();

    assert_eq!(response.verdict.status(), CompatibilityStatus::Unknown);
    assert!(!response.verdict.is_compatible());
    assert_eq!(response.summary.availability, AvailabilityStatus::Unknown);
    assert_eq!(response.unresolved.len(), 2);
}

#[test]
fn test_execute_propagates_catalog_failure() {
    let use_case = CheckCompatibilityUseCase::new(
        FailingCatalog,
        MockBuildReader {
            build: build(vec![("cpu-1", 1)]),
        },
        RecordingReporter::default(),
    );

    let result = use_case.execute(request());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("catalog unavailable"));
}

#[test]
fn test_check_compatibility_port() {
    let use_case = use_case(vec![]);
    let verdict = use_case
        .check_compatibility(&[id("cpu-1"), id("mb-1"), id("ram-1")])
        .unwrap();

    assert_eq!(verdict.status(), CompatibilityStatus::Compatible);
    assert_eq!(verdict.total_power_consumption(), Some(150));
}

#[test]
fn test_check_compatibility_port_with_unknown_ids_only() {
    let use_case = use_case(vec![]);
    let verdict = use_case.check_compatibility(&[id("ghost")]).unwrap();

    assert_eq!(verdict.status(), CompatibilityStatus::Unknown);
    assert_eq!(use_case.progress_reporter.errors.borrow().len(), 1);
}

#[test]
fn test_check_compatibility_port_empty_selection() {
    let use_case = use_case(vec![]);
    let verdict = use_case.check_compatibility(&[]).unwrap();
    assert_eq!(verdict.status(), CompatibilityStatus::Unknown);
}
