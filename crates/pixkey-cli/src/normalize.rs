//! # Normalize and Format Subcommands
//!
//! Both take a key and an optional `--hint` naming the intended kind when
//! the key matches several.

use anyhow::Result;
use clap::Args;
use pixkey_core::{KeyKind, PixKeyEngine};

use crate::{EXIT_OK, EXIT_UNRESOLVED};

/// Arguments shared by `normalize`, `format` and `inspect`.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// The key to process.
    pub key: String,

    /// Intended kind when the key is ambiguous (cpf, cnpj, random, email, phone).
    #[arg(long)]
    pub hint: Option<KeyKind>,
}

/// Execute the normalize subcommand.
pub fn run_normalize(args: &KeyArgs, engine: &PixKeyEngine) -> Result<u8> {
    emit(engine.normalize(&args.key, args.hint), args, "normalize")
}

/// Execute the format subcommand.
pub fn run_format(args: &KeyArgs, engine: &PixKeyEngine) -> Result<u8> {
    emit(engine.format(&args.key, args.hint), args, "format")
}

fn emit(output: Option<String>, args: &KeyArgs, op: &str) -> Result<u8> {
    match output {
        Some(value) => {
            println!("{value}");
            Ok(EXIT_OK)
        }
        None => {
            tracing::warn!(key = %args.key, hint = ?args.hint, "{op}: key did not resolve to a single kind");
            Ok(EXIT_UNRESOLVED)
        }
    }
}
