use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use pc_configurator::application::dto::{FailThreshold, OutputFormat};

/// Check PC builds for component compatibility and browse a parts catalog
#[derive(Parser, Debug)]
#[command(name = "pc-configurator")]
#[command(version)]
#[command(
    about = "Check PC builds for component compatibility and browse a parts catalog",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a build file against the catalog
    Check(CheckArgs),
    /// List catalog components, optionally narrowed to compatible candidates
    Browse(BrowseArgs),
}

/// Options shared by every subcommand
#[derive(ClapArgs, Debug, Clone)]
pub struct CommonArgs {
    /// Catalog file (JSON or TOML). Defaults to `catalog` from the config file, then ./catalog.json
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to pc-configurator.config.yml next to the build file)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct CheckArgs {
    /// Build file (YAML or JSON)
    #[arg(value_name = "BUILD_FILE")]
    pub build: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit with code 1 when the verdict reaches this status: warning or incompatible
    #[arg(long, value_name = "STATUS")]
    pub fail_on: Option<FailThreshold>,
}

#[derive(ClapArgs, Debug)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only list components of this category (cpu, motherboard, ram, ...)
    #[arg(long)]
    pub category: Option<String>,

    /// Only list these brands. Can be specified multiple times
    #[arg(long = "brand", value_name = "BRAND")]
    pub brands: Vec<String>,

    /// Minimum price
    #[arg(long, value_name = "PRICE")]
    pub price_min: Option<f64>,

    /// Maximum price
    #[arg(long, value_name = "PRICE")]
    pub price_max: Option<f64>,

    /// Only list components currently in stock
    #[arg(long)]
    pub in_stock: bool,

    /// Only list these form factors. Can be specified multiple times
    #[arg(long = "form-factor", value_name = "FORM_FACTOR")]
    pub form_factors: Vec<String>,

    /// Maximum power draw in watts (components without a figure are kept)
    #[arg(long, value_name = "WATTS")]
    pub power_max: Option<u32>,

    /// Case-insensitive text matched against brand, name and model
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only list these sockets. Can be specified multiple times
    #[arg(long = "socket", value_name = "SOCKET")]
    pub sockets: Vec<String>,

    /// Only list these memory types. Can be specified multiple times
    #[arg(long = "memory-type", value_name = "TYPE")]
    pub memory_types: Vec<String>,

    /// Only list these interfaces. Can be specified multiple times
    #[arg(long = "interface", value_name = "INTERFACE")]
    pub interfaces: Vec<String>,

    /// Already-selected component ids; requires --category
    #[arg(long = "compatible-with", value_name = "ID")]
    pub compatible_with: Vec<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Components per page (1-100)
    #[arg(long, default_value_t = 20)]
    pub limit: u32,

    /// Include the available filter values in the output
    #[arg(long)]
    pub options: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
