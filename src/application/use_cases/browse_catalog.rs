use crate::application::dto::{BrowseRequest, BrowseResponse};
use crate::compatibility::services::CatalogFilter;
use crate::ports::outbound::{ComponentCatalog, ProgressReporter};
use crate::shared::error::ConfiguratorError;
use crate::shared::Result;

/// BrowseCatalogUseCase - Lists catalog components matching browse criteria
///
/// When parts are already selected, only candidates that fit every selected
/// part are listed, which requires a category to browse.
pub struct BrowseCatalogUseCase<C, PR> {
    catalog: C,
    progress_reporter: PR,
}

impl<C, PR> BrowseCatalogUseCase<C, PR>
where
    C: ComponentCatalog,
    PR: ProgressReporter,
{
    pub fn new(catalog: C, progress_reporter: PR) -> Self {
        Self {
            catalog,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: BrowseRequest) -> Result<BrowseResponse> {
        request.filter.validate()?;

        let records = self.catalog.all()?;
        self.progress_reporter
            .report(&format!("📚 Catalog holds {} component(s)", records.len()));

        let (candidates, compatible_with, unresolved) = if request.compatible_with.is_empty() {
            (records.clone(), Vec::new(), Vec::new())
        } else {
            let Some(category) = request.filter.category.as_ref() else {
                return Err(ConfiguratorError::Validation {
                    message: "--compatible-with needs a --category to pick candidates from"
                        .to_string(),
                }
                .into());
            };

            let resolution = self.catalog.resolve(&request.compatible_with)?;
            for id in &resolution.unresolved {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Selected component '{}' was not found in the catalog and will be ignored.",
                    id
                ));
            }

            let candidates =
                CatalogFilter::compatible_candidates(&records, category, &resolution.records);
            let applied = resolution
                .records
                .iter()
                .map(|r| r.id().clone())
                .collect();
            (candidates, applied, resolution.unresolved)
        };

        let page = CatalogFilter::apply(&candidates, &request.filter)?;

        let options = request.include_options.then(|| {
            let scoped: Vec<_> = match &request.filter.category {
                Some(category) => records
                    .iter()
                    .filter(|r| r.category() == category)
                    .cloned()
                    .collect(),
                None => records.clone(),
            };
            CatalogFilter::filter_options(&scoped)
        });

        self.progress_reporter.report(&format!(
            "✅ {} matching component(s), showing page {} of {}",
            page.total,
            page.page,
            page.total_pages().max(1)
        ));

        Ok(BrowseResponse {
            page,
            options,
            compatible_with,
            unresolved,
        })
    }
}
