//! `dedupe init-config` – write a default config file.

use std::path::Path;

use anyhow::Result;
use dedupe_core::config;

pub fn run_init_config(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    config::write_default(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
