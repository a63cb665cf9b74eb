//! Canned `gh` JSON responses
//!
//! The shapes match what `gh release list --json tagName`, `gh release view
//! <tag> --json assets` and `gh repo view --json url` print.

use serde_json::{Value, json};

/// A release with the asset filenames it carries
#[derive(Debug, Clone)]
pub struct FixtureRelease {
    pub tag: String,
    pub assets: Vec<String>,
}

impl FixtureRelease {
    pub fn new(tag: &str, assets: &[&str]) -> Self {
        Self {
            tag: tag.to_string(),
            assets: assets.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Output of `gh release list --json tagName`
pub fn release_list_json(releases: &[FixtureRelease]) -> String {
    let tags: Vec<Value> = releases
        .iter()
        .map(|r| json!({ "tagName": r.tag }))
        .collect();
    Value::Array(tags).to_string()
}

/// Output of `gh release view <tag> --json assets`
pub fn release_view_json(release: &FixtureRelease) -> String {
    let assets: Vec<Value> = release
        .assets
        .iter()
        .map(|name| {
            json!({
                "apiUrl": format!("https://api.github.com/repos/example/dailybpy/releases/assets/{}", name.len()),
                "contentType": "application/octet-stream",
                "name": name,
                "size": 1024,
                "state": "uploaded",
                "url": format!("https://github.com/example/dailybpy/releases/download/{}/{}", release.tag, name),
            })
        })
        .collect();
    json!({ "assets": assets }).to_string()
}

/// Output of `gh repo view --json url`
pub fn repo_view_json(url: &str) -> String {
    json!({ "url": url }).to_string()
}
