//! # Validate Subcommand
//!
//! Prints every kind a key satisfies, one tag per line in priority order,
//! or a JSON array with `--json`.

use anyhow::Result;
use clap::Args;
use pixkey_core::{Classification, PixKeyEngine};

use crate::{EXIT_OK, EXIT_UNRESOLVED};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The key to classify.
    pub key: String,

    /// Print a JSON array of tags instead of one tag per line.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, engine: &PixKeyEngine) -> Result<u8> {
    let matches = engine.validate(&args.key);
    println!("{}", render(&matches, args.json)?);
    Ok(if matches.is_empty() { EXIT_UNRESOLVED } else { EXIT_OK })
}

fn render(matches: &Classification, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(matches)?);
    }
    Ok(matches.iter().map(|k| k.as_str()).collect::<Vec<_>>().join("\n"))
}
