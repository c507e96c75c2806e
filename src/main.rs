//! cssagg - CSS aggregate cache.
//!
//! Concatenates ordered stylesheet lists into content-addressed aggregates
//! and reuses them across runs through a persistent fingerprint map.

#![allow(dead_code)]

mod aggregate;
mod asset;
mod cli;
mod config;
mod freshness;
mod logger;
mod state;
mod storage;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Optimize { args } => cli::optimize::run_optimize(args, &config),
        Commands::List { pretty } => cli::cache::run_list(*pretty, &config),
        Commands::Clean { .. } => cli::cache::run_clean(&config),
    }
}
