use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rectclique::cli::{CliArgs, CommonArgs, PivotRule};
use rectclique::clique::GroupFinder;
use rectclique::config::LoadedConfig;
use rectclique::input::read_rectangles;
use rectclique::output::{open_output, write_groups};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(cli.command.args())?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("rectclique v{}", env!("CARGO_PKG_VERSION"));

    let rectangles = read_rectangles(&merged.input)?;
    info!("Loaded {} rectangles from {}", rectangles.len(), merged.input.display());

    let result = GroupFinder::new().pivot(merged.pivot).find(&rectangles);

    let mut groups = result.groups;
    let mut out = open_output(merged.output.as_deref())?;
    write_groups(
        &cli.command,
        &mut groups,
        &rectangles,
        &mut *out,
        merged.output.as_deref(),
    )?;

    if let Some(path) = &merged.output {
        info!("Wrote {} output to {}", cli.command.format_name(), path.display());
    }

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
#[derive(Debug)]
struct MergedConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    pivot: PivotRule,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CommonArgs) -> Result<MergedConfig> {
    // Load config if specified
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Input file: CLI > config
    let input = match (&args.input, &loaded_config) {
        (Some(input), _) => input.clone(),
        (None, Some(lc)) => lc
            .resolve_input()
            .context("config file does not name an input file")?,
        // clap's required_unless_present rules this out
        (None, None) => anyhow::bail!("no input file given"),
    };

    // Output file: CLI > config > stdout
    let output = args
        .output
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_output));

    // Pivot rule: CLI > config > default
    let pivot = if let Some(p) = args.pivot {
        p
    } else if let Some(ref lc) = loaded_config {
        parse_pivot(&lc.config.pivot).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown pivot '{}' in config file. Valid values: none, tomita",
                lc.config.pivot
            )
        })?
    } else {
        PivotRule::default()
    };

    // Verbose is CLI-only
    let verbose = args.verbose;

    Ok(MergedConfig {
        input,
        output,
        pivot,
        verbose,
    })
}

fn parse_pivot(s: &str) -> Option<PivotRule> {
    match s {
        "none" => Some(PivotRule::None),
        "tomita" => Some(PivotRule::Tomita),
        _ => None,
    }
}
