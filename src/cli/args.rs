//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// CSS aggregate cache: concatenate, minify and reuse stylesheet aggregates
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: cssagg.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "cssagg.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a list of stylesheets to aggregates
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },

    /// Print the stored cache map as JSON
    #[command(visible_alias = "l")]
    List {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Drop the cache map and delete stale aggregates
    #[command(visible_alias = "c")]
    Clean {
        /// Minimum age in seconds before an aggregate is deleted
        #[arg(short, long)]
        threshold: Option<u64>,
    },
}

/// Optimize command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OptimizeArgs {
    /// JSON array of asset descriptors. Use `-` to read from stdin.
    #[arg(value_name = "MANIFEST", value_hint = clap::ValueHint::FilePath)]
    pub manifest: PathBuf,

    /// Library the assets belong to (repeatable)
    #[arg(short, long = "library", value_name = "NAME")]
    pub libraries: Vec<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Skip lightningcss minification
    #[arg(long)]
    pub no_minify: bool,
}
