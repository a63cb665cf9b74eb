//! Release metadata records returned by the release host
//!
//! Field names follow `gh ... --json` output (camelCase). Unknown fields are
//! ignored; required ones fail deserialization with the field name.

use serde::{Deserialize, Serialize};

/// One entry of `gh release list --json tagName`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSummary {
    /// Release tag name (e.g., "v1.2.0")
    pub tag_name: String,
}

/// Body of `gh release view <tag> --json assets`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetList {
    pub assets: Vec<Asset>,
}

/// Release asset (downloadable file)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Asset {
    /// Asset filename (e.g., "bpy-5.1.0a0-cp311-cp311-win_amd64.whl")
    pub name: String,
    /// File size in bytes, when reported
    #[serde(default)]
    pub size: Option<u64>,
}

impl Asset {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
        }
    }
}

/// A release tag with its assets, in host order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    pub assets: Vec<Asset>,
}

impl Release {
    /// Sum of the reported asset sizes; assets without a size count as zero
    pub fn total_size(&self) -> u64 {
        self.assets.iter().filter_map(|a| a.size).sum()
    }
}

/// `gh repo view --json url`
#[derive(Debug, Clone, Deserialize)]
pub struct RepoView {
    pub url: String,
}
