//! PEP 503 simple repository generation
//!
//! ```text
//! build_index()
//!     ↓
//! 1. Repository URL (release host, falling back to config)
//!     ↓
//! 2. fetch_releases() - any failure aborts before touching disk
//!     ↓
//! 3. collect_wheels() - `.whl` assets, filename descending
//!     ↓
//! 4. render_site() - root page, package page, README
//!     ↓
//! 5. write_site_atomically() - staged, then swapped into place
//! ```

pub mod name;
pub mod render;
pub mod wheel;
pub mod write;

pub use name::normalize_package_name;
pub use wheel::{WHEEL_SUFFIX, WheelLink, collect_wheels, is_wheel};
pub use write::{SiteFile, write_site_atomically};

use dailybpy_core::{Config, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use url::Url;

use crate::github::url::parse_repo_url;
use crate::source::{ReleaseSource, fetch_releases};

/// Outcome of a successful index build
#[derive(Debug, Clone)]
pub struct IndexSummary {
    pub repo_url: Url,
    pub release_count: usize,
    pub wheel_count: usize,
    /// Absolute location of the index
    pub output_dir: PathBuf,
    /// Absolute paths of the files written
    pub files: Vec<PathBuf>,
}

/// Asks the source for the repository URL, falling back to the configured one
pub fn resolve_repo_url(source: &impl ReleaseSource, config: &Config) -> Result<Url> {
    match source.repository_url() {
        Ok(url) => Ok(url),
        Err(e) => {
            let fallback = config.repository.web_url();
            warn!("could not get repository URL ({}); using {}", e, fallback);
            parse_repo_url(&fallback)
        }
    }
}

/// Renders the three site files for `wheels`
pub fn render_site(config: &Config, wheels: &[WheelLink]) -> Vec<SiteFile> {
    let display_name = config.package.name.as_str();
    let normalized = normalize_package_name(display_name);
    let index_name = config
        .repository
        .slug
        .rsplit('/')
        .next()
        .unwrap_or(display_name);

    vec![
        SiteFile::new(
            Path::new(&normalized).join("index.html"),
            render::render_package_page(display_name, wheels),
        ),
        SiteFile::new(
            "index.html",
            render::render_root_page(&[(normalized.clone(), display_name.to_string())]),
        ),
        SiteFile::new(
            "README.md",
            render::render_readme(display_name, index_name, &config.repository.index_url),
        ),
    ]
}

/// Fetches releases from `source` and replaces `output_dir` with a fresh index
pub fn build_index(
    source: &impl ReleaseSource,
    config: &Config,
    output_dir: &Path,
) -> Result<IndexSummary> {
    let repo_url = resolve_repo_url(source, config)?;
    info!("repository URL: {}", repo_url);

    let releases = fetch_releases(source, config.index.release_limit)?;
    let wheels = collect_wheels(&repo_url, &releases);
    info!("{} wheels across {} releases", wheels.len(), releases.len());

    let site = render_site(config, &wheels);
    let files = write_site_atomically(output_dir, &site)?;
    let output_dir = std::fs::canonicalize(output_dir)?;

    Ok(IndexSummary {
        repo_url,
        release_count: releases.len(),
        wheel_count: wheels.len(),
        output_dir,
        files,
    })
}
