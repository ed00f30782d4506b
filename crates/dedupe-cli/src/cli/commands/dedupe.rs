//! `dedupe [flags]` – the main run.

use std::path::Path;

use anyhow::Result;
use dedupe_core::config;
use dedupe_core::pipeline::{dedupe_stream, open_input, open_output, RunStats};

use crate::cli::DedupeArgs;

/// Load config, apply flags, and stream input to output.
///
/// Config and both streams are opened before the first line is read, so a bad
/// config file or unopenable path fails without producing output.
pub fn run_dedupe(args: &DedupeArgs, config_path: Option<&Path>) -> Result<RunStats> {
    let mut cfg = config::load(config_path)?;
    args.apply(&mut cfg);
    tracing::debug!("effective config: {:?}", cfg);

    let normalize = cfg.to_normalize_config();
    let input = open_input(cfg.input.as_deref())?;
    let output = open_output(cfg.output.as_deref())?;

    Ok(dedupe_stream(&normalize, input, output)?)
}
