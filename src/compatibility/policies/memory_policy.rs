use crate::compatibility::domain::{
    Category, CompatibilityIssue, ComponentGroups, ComponentRecord, ComponentSpecs, IssueKind,
    MotherboardSpecs, RamSpecs,
};

/// MemoryPolicy - RAM modules against the motherboard
///
/// Runs only with exactly one motherboard and at least one RAM module.
/// Up to three independent issues can be emitted, in this order:
///
/// - `memory_type_mismatch` (error) for every module whose type the board does not list
/// - `memory_capacity_exceeded` (warning) when total capacity exceeds the board maximum
/// - `memory_slots_exceeded` (error) when there are more modules than slots
///
/// A board maximum or slot count of zero is treated as "not declared".
pub struct MemoryPolicy;

/// A RAM record paired with its typed view, projected once per check
type Module<'a> = (&'a ComponentRecord, RamSpecs);

impl MemoryPolicy {
    pub fn check(groups: &ComponentGroups<'_>) -> Vec<CompatibilityIssue> {
        let Some(board) = groups.single(&Category::Motherboard) else {
            return Vec::new();
        };
        let records = groups.get(&Category::Ram);
        if records.is_empty() {
            return Vec::new();
        }
        let specs = board.specs();
        let Some(board_specs) = specs.as_motherboard() else {
            return Vec::new();
        };

        let modules: Vec<Module<'_>> = records
            .iter()
            .map(|record| (*record, Self::ram_specs(record)))
            .collect();

        let mut issues = Vec::new();

        for (record, ram) in &modules {
            if !Self::supports_type(board_specs, ram) {
                issues.push(Self::type_mismatch(board, board_specs, record, ram));
            }
        }

        if let Some(issue) = Self::capacity_issue(board, board_specs, &modules) {
            issues.push(issue);
        }

        if let Some(issue) = Self::slots_issue(board, board_specs, records) {
            issues.push(issue);
        }

        issues
    }

    /// Pairwise form used when narrowing catalog candidates
    pub fn is_compatible(board: &ComponentRecord, module: &ComponentRecord) -> bool {
        let ram = Self::ram_specs(module);
        board
            .specs()
            .as_motherboard()
            .is_none_or(|specs| Self::supports_type(specs, &ram))
    }

    fn ram_specs(record: &ComponentRecord) -> RamSpecs {
        match record.specs() {
            ComponentSpecs::Ram(ram) => ram,
            _ => RamSpecs::default(),
        }
    }

    fn supports_type(board: &MotherboardSpecs, ram: &RamSpecs) -> bool {
        board.memory_types.is_empty()
            || ram.memory_types.is_empty()
            || ram.memory_types.iter().any(|t| board.memory_types.contains(t))
    }

    fn type_mismatch(
        board: &ComponentRecord,
        board_specs: &MotherboardSpecs,
        module: &ComponentRecord,
        ram: &RamSpecs,
    ) -> CompatibilityIssue {
        let supported = board_specs.memory_types.join(", ");

        CompatibilityIssue::error(
            IssueKind::MemoryTypeMismatch,
            format!(
                "Memory type {} is not supported by the motherboard (supports {})",
                ram.memory_types.join("/"),
                supported
            ),
            vec![module.id().clone(), board.id().clone()],
        )
        .with_suggestion(format!("Choose memory of type {}", supported))
    }

    fn capacity_issue(
        board: &ComponentRecord,
        board_specs: &MotherboardSpecs,
        modules: &[Module<'_>],
    ) -> Option<CompatibilityIssue> {
        let max = board_specs.max_memory_gb.filter(|max| *max > 0)?;
        let total: f64 = modules.iter().filter_map(|(_, ram)| ram.capacity_gb).sum();

        if total <= f64::from(max) {
            return None;
        }

        let mut ids: Vec<_> = modules.iter().map(|(m, _)| m.id().clone()).collect();
        ids.push(board.id().clone());

        Some(
            CompatibilityIssue::warning(
                IssueKind::MemoryCapacityExceeded,
                format!(
                    "Total memory ({}GB) exceeds the motherboard maximum ({}GB)",
                    total, max
                ),
                ids,
            )
            .with_suggestion(format!("Reduce total memory to {}GB", max)),
        )
    }

    fn slots_issue(
        board: &ComponentRecord,
        board_specs: &MotherboardSpecs,
        modules: &[&ComponentRecord],
    ) -> Option<CompatibilityIssue> {
        let slots = board_specs.memory_slots.filter(|slots| *slots > 0)?;
        if modules.len() <= slots as usize {
            return None;
        }

        let mut ids: Vec<_> = modules.iter().map(|m| m.id().clone()).collect();
        ids.push(board.id().clone());

        Some(
            CompatibilityIssue::error(
                IssueKind::MemorySlotsExceeded,
                format!(
                    "Memory modules ({}) exceed the number of slots ({})",
                    modules.len(),
                    slots
                ),
                ids,
            )
            .with_suggestion(format!("Use at most {} memory modules", slots)),
        )
    }
}
