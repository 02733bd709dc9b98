use crate::application::dto::{CheckRequest, CheckResponse};
use crate::compatibility::domain::{
    BuildConfiguration, CompatibilityStatus, CompatibilityVerdict, ComponentId, ComponentRecord,
    ResolvedItem,
};
use crate::compatibility::services::{
    CompatibilityChecker, ConfigurationSummarizer, ReportGenerator,
};
use crate::ports::inbound::CompatibilityCheckPort;
use crate::ports::outbound::{BuildReader, ComponentCatalog, ProgressReporter};
use crate::shared::Result;

/// Resolved build items with the ids the catalog did not know
type ResolvedBuild = (Vec<ResolvedItem>, Vec<ComponentId>);

/// CheckCompatibilityUseCase - Core use case for checking a PC build
///
/// This use case orchestrates the check workflow using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `C` - ComponentCatalog implementation
/// * `B` - BuildReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckCompatibilityUseCase<C, B, PR> {
    catalog: C,
    build_reader: B,
    progress_reporter: PR,
}

impl<C, B, PR> CheckCompatibilityUseCase<C, B, PR>
where
    C: ComponentCatalog,
    B: BuildReader,
    PR: ProgressReporter,
{
    /// Creates a new CheckCompatibilityUseCase with injected dependencies
    pub fn new(catalog: C, build_reader: B, progress_reporter: PR) -> Self {
        Self {
            catalog,
            build_reader,
            progress_reporter,
        }
    }

    /// Executes the compatibility check for a build file
    ///
    /// # Returns
    /// CheckResponse containing the verdict, the summary and the resolved items
    ///
    /// # Errors
    /// Returns an error if the build file cannot be read or the catalog lookup fails.
    /// An incompatible build is not an error.
    pub fn execute(&self, request: CheckRequest) -> Result<CheckResponse> {
        // Step 1: Load the build
        self.progress_reporter.report(&format!(
            "📖 Loading build file from: {}",
            request.build_path.display()
        ));
        let build = self.build_reader.read_build(&request.build_path)?;
        self.progress_reporter.report(&format!(
            "✅ Build '{}' lists {} item(s)",
            build.name(),
            build.items().len()
        ));

        // Step 2: Resolve build items against the catalog
        let (items, unresolved) = self.resolve_items(&build)?;

        // Step 3: Run the rule engine over one record per unit
        let records = Self::expand_units(&items);
        let verdict = CompatibilityChecker::check(&records);
        self.report_verdict(&verdict);

        // Step 4: Aggregate figures
        let summary = ConfigurationSummarizer::summarize(&items, &request.essential_categories);
        if !summary.missing_categories.is_empty() {
            let missing: Vec<&str> = summary
                .missing_categories
                .iter()
                .map(|c| c.display_name())
                .collect();
            self.progress_reporter.report(&format!(
                "ℹ️  Build is missing: {}",
                missing.join(", ")
            ));
        }

        Ok(CheckResponse {
            build,
            items,
            verdict,
            summary,
            unresolved,
            metadata: ReportGenerator::generate_default_metadata(),
        })
    }

    /// Looks up every build item, reporting progress and unknown ids
    fn resolve_items(&self, build: &BuildConfiguration) -> Result<ResolvedBuild> {
        self.progress_reporter
            .report("🔍 Resolving components in the catalog...");

        let total = build.items().len();
        let mut items = Vec::with_capacity(total);
        let mut unresolved = Vec::new();

        for (idx, item) in build.items().iter().enumerate() {
            match self.catalog.find(item.component_id())? {
                Some(record) => items.push(ResolvedItem::new(record, item)),
                None => unresolved.push(item.component_id().clone()),
            }
            self.progress_reporter
                .report_progress(idx + 1, total, Some(item.component_id().as_str()));
        }

        self.report_unresolved(&unresolved);
        self.progress_reporter.report_completion(&format!(
            "✅ Component resolution complete: {} of {} found",
            items.len(),
            total
        ));

        Ok((items, unresolved))
    }

    /// One record per unit, in build order
    fn expand_units(items: &[ResolvedItem]) -> Vec<ComponentRecord> {
        items
            .iter()
            .flat_map(|item| std::iter::repeat_n(item.record.clone(), item.quantity as usize))
            .collect()
    }

    fn report_unresolved(&self, unresolved: &[ComponentId]) {
        for id in unresolved {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Component '{}' was not found in the catalog and will be skipped.",
                id
            ));
        }
    }

    fn report_verdict(&self, verdict: &CompatibilityVerdict) {
        let message = match verdict.status() {
            CompatibilityStatus::Compatible => "✅ All components are compatible".to_string(),
            CompatibilityStatus::Warning => format!(
                "⚠️  Compatible with {} warning(s)",
                verdict.issues().len()
            ),
            CompatibilityStatus::Incompatible => format!(
                "❌ Incompatible: {} issue(s) found",
                verdict.issues().len()
            ),
            CompatibilityStatus::Unknown => "❔ No known components to check".to_string(),
        };
        self.progress_reporter.report(&message);
    }
}

impl<C, B, PR> CompatibilityCheckPort for CheckCompatibilityUseCase<C, B, PR>
where
    C: ComponentCatalog,
    B: BuildReader,
    PR: ProgressReporter,
{
    fn check_compatibility(&self, component_ids: &[ComponentId]) -> Result<CompatibilityVerdict> {
        let resolution = self.catalog.resolve(component_ids)?;
        self.report_unresolved(&resolution.unresolved);
        Ok(CompatibilityChecker::check(&resolution.records))
    }
}

#[cfg(test)]
mod tests;
