//! # pixkey-cli: Command-Line Interface
//!
//! Provides the `pixkey` binary over [`pixkey_core`].
//!
//! ## Subcommands
//!
//! - `pixkey validate <KEY>`: every kind the key satisfies
//! - `pixkey normalize <KEY> [--hint KIND]`: canonical form
//! - `pixkey format <KEY> [--hint KIND]`: display form
//! - `pixkey inspect <KEY> [--hint KIND]`: all of the above as JSON
//!
//! Handlers return the process exit code: `0` when the key resolved, `1`
//! when it did not. Argument parsing lives in `main.rs`; no classification
//! logic lives here.

pub mod inspect;
pub mod normalize;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use pixkey_core::{PixKeyConfig, PixKeyEngine, Region};

/// Exit code for a key that resolved.
pub const EXIT_OK: u8 = 0;
/// Exit code for a key that matched nothing or stayed ambiguous.
pub const EXIT_UNRESOLVED: u8 = 1;

/// Build the engine from an optional config file, the environment, and an
/// optional `--region` flag, in increasing precedence.
pub fn build_engine(config_path: Option<&Path>, region: Option<Region>) -> Result<PixKeyEngine> {
    let config = match config_path {
        Some(path) => PixKeyConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => PixKeyConfig::default(),
    };
    let mut config = config
        .with_env_overrides()
        .context("applying environment overrides")?;
    if let Some(region) = region {
        config.default_region = region;
    }
    tracing::debug!(region = %config.default_region, "engine configured");
    Ok(PixKeyEngine::from_config(&config))
}
