use crate::compatibility::domain::{
    Category, CompatibilityIssue, ComponentGroups, ComponentRecord, IssueKind,
};

/// PowerBudgetPolicy - total draw against the chosen PSU
///
/// The recommended PSU wattage carries a 20% margin over the total draw and
/// is rounded down. A PSU below the total draw is an error; a PSU between
/// the total and the recommendation is a warning.
pub struct PowerBudgetPolicy;

impl PowerBudgetPolicy {
    /// Sum of every reported power draw, or `None` if no record reports one
    pub fn total_power(records: &[ComponentRecord]) -> Option<u32> {
        records
            .iter()
            .filter_map(ComponentRecord::power_draw)
            .fold(None, |acc: Option<u32>, watts| {
                Some(acc.unwrap_or(0).saturating_add(watts))
            })
    }

    /// `floor(total * 1.2)`, absent when there is nothing to power
    pub fn recommended_wattage(total_power: Option<u32>) -> Option<u32> {
        let total = total_power.filter(|total| *total > 0)?;
        let recommended = u64::from(total) * 6 / 5;
        Some(u32::try_from(recommended).unwrap_or(u32::MAX))
    }

    pub fn check(groups: &ComponentGroups<'_>, total_power: Option<u32>) -> Vec<CompatibilityIssue> {
        let Some(psu) = groups.single(&Category::Psu) else {
            return Vec::new();
        };
        let Some(total) = total_power.filter(|total| *total > 0) else {
            return Vec::new();
        };
        let recommended = Self::recommended_wattage(Some(total)).unwrap_or(total);
        let wattage = psu
            .specs()
            .as_psu()
            .and_then(|specs| specs.wattage)
            .unwrap_or(0);

        if wattage < total {
            vec![CompatibilityIssue::error(
                IssueKind::PowerInsufficient,
                format!(
                    "PSU wattage ({}W) is below the system's power draw ({}W)",
                    wattage, total
                ),
                vec![psu.id().clone()],
            )
            .with_suggestion(format!("Choose a PSU of at least {}W", recommended))]
        } else if wattage < recommended {
            vec![CompatibilityIssue::warning(
                IssueKind::PowerWarning,
                format!(
                    "PSU wattage ({}W) leaves little headroom over the system's power draw ({}W)",
                    wattage, total
                ),
                vec![psu.id().clone()],
            )
            .with_suggestion(format!(
                "Consider a PSU of {}W or more for a safer margin",
                recommended
            ))]
        } else {
            Vec::new()
        }
    }
}
