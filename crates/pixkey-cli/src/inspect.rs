//! # Inspect Subcommand
//!
//! Prints one JSON object describing everything known about a key:
//!
//! ```json
//! {"input":"85966078033","matches":["cpf","phone"],"resolution":{"reason":"ambiguous"}}
//! {"input":"85966078033","matches":["cpf","phone"],"kind":"phone","canonical":"+5585966078033","display":"(85) 96607-8033"}
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pixkey_core::{Classification, KeyKind, PixKey, PixKeyEngine, Recognizers, Resolution, UnresolvedReason};

use crate::normalize::KeyArgs;
use crate::{EXIT_OK, EXIT_UNRESOLVED};

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,
}

/// JSON report produced by `pixkey inspect`.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub input: String,
    pub matches: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<UnresolvedReason>,
    #[serde(flatten)]
    pub key: Option<PixKey>,
}

/// Build the report for `args` without printing it.
pub fn inspect<R: Recognizers>(args: &KeyArgs, engine: &PixKeyEngine<R>) -> InspectReport {
    let matches = engine.validate(&args.key);
    let (resolution, key) = match engine.resolve(&args.key, args.hint) {
        Resolution::Unresolved(reason) => (Some(reason), None),
        Resolution::Resolved(_) => match engine.analyze(&args.key, args.hint) {
            Some(key) => (None, Some(key)),
            None => (Some(render_failure(engine, &args.key, args.hint)), None),
        },
    };
    InspectReport {
        input: args.key.clone(),
        matches,
        resolution,
        key,
    }
}

/// Why a resolved key produced no [`PixKey`]: its canonical form either
/// failed to resolve again, or the phone parser gave up on it.
fn render_failure<R: Recognizers>(engine: &PixKeyEngine<R>, key: &str, hint: Option<KeyKind>) -> UnresolvedReason {
    match engine.normalize(key, hint).map(|canonical| engine.resolve(&canonical, hint)) {
        Some(Resolution::Unresolved(reason)) => reason,
        Some(Resolution::Resolved(_)) | None => UnresolvedReason::RenderFailed,
    }
}

/// Execute the inspect subcommand.
pub fn run_inspect(args: &InspectArgs, engine: &PixKeyEngine) -> Result<u8> {
    let report = inspect(&args.key, engine);
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(if report.key.is_some() { EXIT_OK } else { EXIT_UNRESOLVED })
}
