//! Command-line front ends for dailybpy: `dailybpy-index` and `dailybpy-install`

pub mod cli;
pub mod commands;
pub mod output;

use anyhow::Result;
use dailybpy_core::Config;
use log::debug;
use std::path::Path;

/// Sets up `env_logger`; `RUST_LOG` takes precedence over `verbose`
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Loads the explicit config file, or ./dailybpy.toml when present
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(explicit, &cwd)?;
    debug!("configuration: {:?}", config);
    Ok(config)
}

/// Runs `f` and exits 1 after printing its error
pub fn run_main(f: impl FnOnce() -> Result<()>) {
    if let Err(e) = f() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
