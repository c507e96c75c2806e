//! Command-line interface module.

mod args;
pub mod cache;
pub mod optimize;

pub use args::{Cli, Commands, OptimizeArgs};

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::log;

/// Print `value` as JSON to stdout, or to `output` when given.
pub(crate) fn write_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(output_path) = output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("optimize"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
