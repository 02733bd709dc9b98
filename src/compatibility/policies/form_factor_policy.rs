use crate::compatibility::domain::{
    Category, CompatibilityIssue, ComponentGroups, ComponentRecord, IssueKind,
};

/// FormFactorPolicy - the case must accept the motherboard's form factor
pub struct FormFactorPolicy;

impl FormFactorPolicy {
    pub fn check(groups: &ComponentGroups<'_>) -> Vec<CompatibilityIssue> {
        let (Some(case), Some(board)) = (
            groups.single(&Category::Case),
            groups.single(&Category::Motherboard),
        ) else {
            return Vec::new();
        };

        match Self::mismatch(case, board) {
            Some((form_factor, supported)) => vec![CompatibilityIssue::error(
                IssueKind::FormFactorMismatch,
                format!(
                    "Motherboard form factor {} is not supported by the case (supports {})",
                    form_factor,
                    supported.join(", ")
                ),
                vec![case.id().clone(), board.id().clone()],
            )
            .with_suggestion(format!("Choose a case that supports {}", form_factor))],
            None => Vec::new(),
        }
    }

    /// Pairwise form used when narrowing catalog candidates
    pub fn is_compatible(case: &ComponentRecord, board: &ComponentRecord) -> bool {
        Self::mismatch(case, board).is_none()
    }

    fn mismatch(case: &ComponentRecord, board: &ComponentRecord) -> Option<(String, Vec<String>)> {
        let supported = case.specs().as_case()?.supported_form_factors.clone();
        let form_factor = board.specs().as_motherboard()?.form_factor.clone()?;

        if supported.is_empty() || supported.contains(&form_factor) {
            None
        } else {
            Some((form_factor, supported))
        }
    }
}
