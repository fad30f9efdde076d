//! reportprune - keep only the latest dated report in a folder.
//!
//! Usage:
//!   reportprune [DIRECTORY]            Delete older reports and images
//!   reportprune [DIRECTORY] --dry-run  Preview what would be deleted
//!   reportprune --help                 Show help

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use reportprune_core::PruneConfig;
use reportprune_ops::{ExecutionMode, Executor};
use reportprune_plan::RetentionPlanner;
use reportprune_scan::ReportScanner;

#[derive(Parser)]
#[command(
    name = "reportprune",
    version,
    about = "Keep only the most recent dated report in a folder and prune the rest",
    long_about = "reportprune walks a downloaded folder, keeps the single newest \
                  Data_Volume_Report_DDMMYYYY.xlsx file and deletes older reports \
                  and every image.\n\n\
                  Run with --dry-run first to preview the deletions."
)]
struct Cli {
    /// Directory to clean
    #[arg(default_value = "extracted_files", env = "REPORTPRUNE_DIR")]
    directory: PathBuf,

    /// Show what would be deleted without deleting anything
    #[arg(long, env = "REPORTPRUNE_DRY_RUN")]
    dry_run: bool,

    /// Enable verbose output (sets log level to DEBUG)
    #[arg(short, long, env = "REPORTPRUNE_VERBOSE")]
    verbose: bool,

    /// Image extension to prune; repeat to replace the default set
    #[arg(
        long = "image-ext",
        value_name = "EXT",
        env = "REPORTPRUNE_IMAGE_EXT",
        value_delimiter = ','
    )]
    image_ext: Vec<String>,

    /// Report filename regex with `day`, `month` and `year` named groups
    #[arg(long, value_name = "REGEX", env = "REPORTPRUNE_REPORT_PATTERN")]
    report_pattern: Option<String>,

    /// Maximum directory depth to scan
    #[arg(long, value_name = "N")]
    max_depth: Option<u32>,

    /// Follow symbolic links while scanning
    #[arg(long, env = "REPORTPRUNE_FOLLOW_SYMLINKS")]
    follow_symlinks: bool,

    /// Ignore hidden files and directories (names starting with .)
    #[arg(long, env = "REPORTPRUNE_SKIP_HIDDEN")]
    skip_hidden: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let scanner = ReportScanner::new(config).wrap_err("Invalid configuration")?;
    let outcome = scanner
        .scan()
        .wrap_err_with(|| format!("Cannot clean {}", cli.directory.display()))?;

    let plan = RetentionPlanner::new().plan(&outcome.files);
    let result = Executor::new(ExecutionMode::from_dry_run(cli.dry_run)).execute(&plan);

    match cli.format {
        OutputFormat::Text => report::print_text(&outcome, &plan, &result, cli.verbose),
        OutputFormat::Json => report::print_json(&outcome, &plan, &result)?,
    }

    if result.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Wire the verbose flag to the tracing log level, on top of RUST_LOG.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Build the prune config from CLI flags.
fn build_config(cli: &Cli) -> Result<PruneConfig> {
    let mut builder = PruneConfig::builder();
    builder
        .root(&cli.directory)
        .max_depth(cli.max_depth)
        .follow_symlinks(cli.follow_symlinks)
        .include_hidden(!cli.skip_hidden);

    if !cli.image_ext.is_empty() {
        builder.image_extensions(&cli.image_ext);
    }
    if let Some(pattern) = &cli.report_pattern {
        builder.report_pattern(pattern.clone());
    }

    builder.build().wrap_err("Invalid configuration")
}
