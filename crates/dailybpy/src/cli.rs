//! CLI argument structures using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dailybpy-index")]
#[command(version, about = "Generate a PEP 503 simple index from GitHub releases", long_about = None)]
pub struct IndexCli {
    /// Directory to write the index into (default: `index.output_dir`, "simple")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to dailybpy.toml (default: ./dailybpy.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "dailybpy-install")]
#[command(version, about = "Install the latest daily bpy wheel for this machine", long_about = None)]
pub struct InstallCli {
    /// Install with `uv pip` instead of pip
    #[arg(long)]
    pub uv: bool,

    /// Skip the import check after installing
    #[arg(long)]
    pub skip_test: bool,

    /// GitHub repository as owner/name
    #[arg(long, env = "DAILYBPY_REPO")]
    pub repo: Option<String>,

    /// Python interpreter to install into
    #[arg(long)]
    pub python: Option<String>,

    /// Continue on a Python version mismatch without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Path to dailybpy.toml (default: ./dailybpy.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}
