use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rectclique")]
#[command(
    version,
    about = "Find maximal groups of mutually overlapping rectangles",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print one group per line as 1-based rectangle positions, e.g. [1, 2]
    Text(CommonArgs),
    /// Print groups and their rectangles as JSON
    Json(CommonArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Rectangle file: one "x y width height" line per rectangle
    #[arg(required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Load settings from a .rectclique config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write results to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pivot rule for the clique search [default: tomita]
    #[arg(long, value_enum)]
    pub pivot: Option<PivotRule>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the Bron–Kerbosch search picks the vertices it branches on
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum PivotRule {
    /// Branch on every candidate (classic Bron–Kerbosch)
    #[value(name = "none")]
    None,
    /// Skip neighbours of the candidate with the most candidate neighbours
    #[default]
    #[value(name = "tomita")]
    Tomita,
}

impl Command {
    pub fn args(&self) -> &CommonArgs {
        match self {
            Command::Text(args) | Command::Json(args) => args,
        }
    }

    /// Output format name implied by the subcommand
    pub fn format_name(&self) -> &'static str {
        match self {
            Command::Text(_) => "text",
            Command::Json(_) => "json",
        }
    }
}
