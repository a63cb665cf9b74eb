//! Release metadata sources
//!
//! [`ReleaseSource`] is the seam between index generation and the release
//! host. The production implementation is [`crate::github::GhCli`].

pub mod release;

pub use release::{Asset, AssetList, Release, ReleaseSummary, RepoView};

use dailybpy_core::{DailybpyError, Result};
use log::{debug, info};
use url::Url;

/// Read access to a repository's published releases
pub trait ReleaseSource {
    /// Web URL of the repository the releases belong to
    fn repository_url(&self) -> Result<Url>;

    /// Up to `limit` releases, newest first
    fn list_releases(&self, limit: usize) -> Result<Vec<ReleaseSummary>>;

    /// Assets attached to the release tagged `tag`
    fn release_assets(&self, tag: &str) -> Result<Vec<Asset>>;
}

/// Lists releases and fetches the assets of each one.
///
/// Any failure aborts the whole fetch; a partial catalog is never returned.
/// At most `limit` releases are kept even if the source returns more.
pub fn fetch_releases(source: &impl ReleaseSource, limit: usize) -> Result<Vec<Release>> {
    let summaries = source.list_releases(limit)?;
    info!("found {} releases", summaries.len());

    let mut releases = Vec::with_capacity(summaries.len().min(limit));
    for summary in summaries.into_iter().take(limit) {
        if summary.tag_name.trim().is_empty() {
            return Err(DailybpyError::InvalidReleaseData {
                context: "release list".to_string(),
                reason: "release has an empty tagName".to_string(),
            });
        }

        let assets = source.release_assets(&summary.tag_name)?;
        let release = Release {
            tag_name: summary.tag_name,
            assets,
        };
        debug!(
            "{}: {} assets, {} bytes",
            release.tag_name,
            release.assets.len(),
            release.total_size()
        );
        releases.push(release);
    }

    Ok(releases)
}
