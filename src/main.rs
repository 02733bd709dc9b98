mod cli;

use cli::{Args, BrowseArgs, CheckArgs, Command, CommonArgs};
use pc_configurator::adapters::outbound::catalog::{CachingComponentCatalog, InMemoryCatalog};
use pc_configurator::adapters::outbound::console::StderrProgressReporter;
use pc_configurator::adapters::outbound::filesystem::FileSystemReader;
use pc_configurator::application::dto::{
    BrowseRequest, CheckRequest, FailThreshold, OutputFormat,
};
use pc_configurator::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pc_configurator::application::read_models::{CatalogViewBuilder, CompatibilityReportBuilder};
use pc_configurator::application::use_cases::{BrowseCatalogUseCase, CheckCompatibilityUseCase};
use pc_configurator::compatibility::domain::{Category, CompatibilityStatus, ComponentId};
use pc_configurator::compatibility::services::ComponentFilter;
use pc_configurator::config::{self, ConfigFile};
use pc_configurator::ports::outbound::CatalogReader;
use pc_configurator::shared::error::ExitCode;
use pc_configurator::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_CATALOG: &str = "catalog.json";

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Check(check) => run_check(check),
        Command::Browse(browse) => run_browse(browse),
    }
}

fn run_check(args: CheckArgs) -> Result<ExitCode> {
    let build_dir = args
        .build
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let config = load_config(&args.common, build_dir)?;

    let format = resolve_format(&args.common, &config);
    let fail_on = args
        .fail_on
        .or_else(|| config.fail_threshold())
        .unwrap_or_default();
    let essential = config
        .essential_categories()
        .unwrap_or_else(|| Category::ESSENTIAL.to_vec());

    let catalog = load_catalog(&args.common, &config)?;
    let use_case = CheckCompatibilityUseCase::new(
        CachingComponentCatalog::new(catalog),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(CheckRequest::new(args.build.clone(), essential))?;
    let status = response.verdict.status();

    eprintln!("{}", FormatterFactory::progress_message(format));
    let report = CompatibilityReportBuilder::build(&response);
    let formatted_output = FormatterFactory::create(format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.common.output));
    presenter.present(&formatted_output)?;

    Ok(exit_code_for(fail_on, status))
}

fn run_browse(args: BrowseArgs) -> Result<ExitCode> {
    let config = load_config(&args.common, Path::new("."))?;
    let format = resolve_format(&args.common, &config);

    let compatible_with = args
        .compatible_with
        .iter()
        .map(|id| ComponentId::new(id.as_str()))
        .collect::<Result<Vec<_>>>()?;

    let request = BrowseRequest {
        filter: ComponentFilter {
            category: args.category.as_deref().map(Category::from),
            brands: args.brands,
            price_min: args.price_min,
            price_max: args.price_max,
            only_in_stock: args.in_stock,
            form_factors: args.form_factors,
            power_max: args.power_max,
            search: args.search,
            sockets: args.sockets,
            memory_types: args.memory_types,
            interfaces: args.interfaces,
            page: args.page,
            limit: args.limit,
        },
        compatible_with,
        include_options: args.options,
    };

    let catalog = load_catalog(&args.common, &config)?;
    let use_case = BrowseCatalogUseCase::new(catalog, StderrProgressReporter::new());
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let view = CatalogViewBuilder::build(&response);
    let formatted_output = FormatterFactory::create(format).format_catalog(&view)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.common.output));
    presenter.present(&formatted_output)?;

    Ok(ExitCode::Success)
}

/// Explicit `--config` wins; otherwise a config file is looked up in `dir`
fn load_config(common: &CommonArgs, dir: &Path) -> Result<ConfigFile> {
    let config = match &common.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(dir)?,
    };
    Ok(config.unwrap_or_default())
}

fn resolve_format(common: &CommonArgs, config: &ConfigFile) -> OutputFormat {
    common
        .format
        .or_else(|| config.output_format())
        .unwrap_or_default()
}

fn load_catalog(common: &CommonArgs, config: &ConfigFile) -> Result<InMemoryCatalog> {
    let path = common
        .catalog
        .clone()
        .or_else(|| config.catalog_path())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

    eprintln!("📚 Loading catalog from: {}", path.display());
    let records = FileSystemReader::new().read_catalog(&path)?;
    InMemoryCatalog::new(records)
}

fn exit_code_for(fail_on: FailThreshold, status: CompatibilityStatus) -> ExitCode {
    if fail_on.is_reached_by(status) {
        ExitCode::IncompatibleBuild
    } else {
        ExitCode::Success
    }
}
