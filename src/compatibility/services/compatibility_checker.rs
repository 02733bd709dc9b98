use crate::compatibility::domain::{ComponentGroups, ComponentRecord, CompatibilityVerdict};
use crate::compatibility::policies::{
    FormFactorPolicy, MemoryPolicy, PowerBudgetPolicy, SocketPolicy, StatusPolicy,
};

/// CompatibilityChecker service for evaluating a set of resolved components
///
/// This service contains the pure rule engine. It performs no I/O, holds no
/// state and can be called concurrently from any number of threads.
pub struct CompatibilityChecker;

impl CompatibilityChecker {
    /// Evaluates a resolved record set and returns one verdict
    ///
    /// Issues are reported in rule order: socket, memory, form factor, power.
    ///
    /// # Arguments
    /// * `records` - Resolved component records; repeated records count as separate units
    ///
    /// # Returns
    /// A verdict with status `unknown` for an empty record set
    pub fn check(records: &[ComponentRecord]) -> CompatibilityVerdict {
        if records.is_empty() {
            return CompatibilityVerdict::unknown();
        }

        let groups = ComponentGroups::from_records(records);
        let total_power = PowerBudgetPolicy::total_power(records);

        let mut issues = SocketPolicy::check(&groups);
        issues.extend(MemoryPolicy::check(&groups));
        issues.extend(FormFactorPolicy::check(&groups));
        issues.extend(PowerBudgetPolicy::check(&groups, total_power));

        let status = StatusPolicy::resolve(&issues);
        let recommended = PowerBudgetPolicy::recommended_wattage(total_power);

        CompatibilityVerdict::new(status, issues, total_power, recommended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::domain::{Category, CompatibilityStatus, IssueKind, Severity};
    use crate::compatibility::test_fixtures::*;

    fn valid_build() -> Vec<ComponentRecord> {
        vec![
            cpu("cpu-1", "AM5").with_power_draw(Some(120)),
            motherboard("mb-1", "AM5", vec!["DDR5"], 128, 4, "ATX").with_power_draw(Some(50)),
            ram("ram-1", "DDR5", 32).with_power_draw(Some(5)),
            ram("ram-2", "DDR5", 32).with_power_draw(Some(5)),
            case("case-1", vec!["ATX", "Micro-ATX"]),
            part("gpu-1", Category::Gpu, Some(320)),
            psu("psu-1", 850),
        ]
    }

    #[test]
    fn test_empty_input_is_unknown() {
        let verdict = CompatibilityChecker::check(&[]);
        assert_eq!(verdict.status(), CompatibilityStatus::Unknown);
        assert!(!verdict.is_compatible());
        assert!(verdict.issues().is_empty());
        assert_eq!(verdict.total_power_consumption(), None);
        assert_eq!(verdict.recommended_psu_wattage(), None);
    }

    #[test]
    fn test_valid_build_is_compatible() {
        let verdict = CompatibilityChecker::check(&valid_build());

        assert_eq!(verdict.status(), CompatibilityStatus::Compatible);
        assert!(verdict.is_compatible());
        assert!(verdict.issues().is_empty());
        assert_eq!(verdict.total_power_consumption(), Some(500));
        assert_eq!(verdict.recommended_psu_wattage(), Some(600));
    }

    #[test]
    fn test_single_component_is_compatible() {
        let verdict = CompatibilityChecker::check(&[part("gpu-1", Category::Gpu, Some(200))]);
        assert_eq!(verdict.status(), CompatibilityStatus::Compatible);
        assert_eq!(verdict.total_power_consumption(), Some(200));
        assert_eq!(verdict.recommended_psu_wattage(), Some(240));
    }

    #[test]
    fn test_records_without_power_have_no_figures() {
        let verdict = CompatibilityChecker::check(&[case("case-1", vec!["ATX"])]);
        assert_eq!(verdict.status(), CompatibilityStatus::Compatible);
        assert_eq!(verdict.total_power_consumption(), None);
        assert_eq!(verdict.recommended_psu_wattage(), None);
    }

    #[test]
    fn test_warning_only_build() {
        let mut records = valid_build();
        records.pop();
        records.push(psu("psu-1", 550));

        let verdict = CompatibilityChecker::check(&records);
        assert_eq!(verdict.status(), CompatibilityStatus::Warning);
        assert!(!verdict.is_compatible());
        assert_eq!(verdict.count_by_severity(Severity::Warning), 1);
    }

    #[test]
    fn test_issues_follow_rule_order() {
        let records = vec![
            psu("psu-1", 100),
            case("case-1", vec!["Mini-ITX"]),
            ram("ram-1", "DDR4", 16),
            motherboard("mb-1", "LGA1700", vec!["DDR5"], 64, 2, "ATX").with_power_draw(Some(60)),
            cpu("cpu-1", "AM5").with_power_draw(Some(170)),
        ];

        let verdict = CompatibilityChecker::check(&records);
        let kinds: Vec<IssueKind> = verdict.issues().iter().map(|i| i.kind).collect();

        assert_eq!(
            kinds,
            vec![
                IssueKind::SocketMismatch,
                IssueKind::MemoryTypeMismatch,
                IssueKind::FormFactorMismatch,
                IssueKind::PowerInsufficient,
            ]
        );
        assert_eq!(verdict.status(), CompatibilityStatus::Incompatible);
    }

    #[test]
    fn test_repeated_records_count_per_unit() {
        let module = ram("ram-1", "DDR5", 32).with_power_draw(Some(5));
        let records = vec![
            motherboard("mb-1", "AM5", vec!["DDR5"], 64, 2, "ATX"),
            module.clone(),
            module.clone(),
            module,
        ];

        let verdict = CompatibilityChecker::check(&records);
        let kinds: Vec<IssueKind> = verdict.issues().iter().map(|i| i.kind).collect();

        assert_eq!(
            kinds,
            vec![IssueKind::MemoryCapacityExceeded, IssueKind::MemorySlotsExceeded]
        );
        assert_eq!(verdict.total_power_consumption(), Some(15));
    }
}
