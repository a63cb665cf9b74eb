//! `dailybpy-index` - regenerate the simple index from GitHub releases

use anyhow::Result;
use dailybpy_release::{GhCli, build_index};
use std::path::PathBuf;

use crate::cli::IndexCli;
use crate::output;

pub fn run(cli: IndexCli) -> Result<()> {
    let config = crate::load_config(cli.config.as_deref())?;
    let output_dir = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.index.output_dir));

    println!("Fetching releases...");
    let summary = build_index(&GhCli::new(), &config, &output_dir)?;

    output::success(&format!(
        "Generated index with {} wheels from {} releases",
        summary.wheel_count, summary.release_count
    ));
    println!("  Location: {}", summary.output_dir.display());
    println!();
    println!("To test locally:");
    println!("  cd {} && python -m http.server 8000", output_dir.display());
    println!(
        "  pip install {} --extra-index-url http://localhost:8000/",
        config.package.name
    );
    Ok(())
}
