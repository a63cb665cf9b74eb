//! Shared GitHub interaction utilities
//!
//! - `gh` CLI access to release metadata
//! - Safe URL construction helpers for release downloads

pub mod gh;
pub mod url;

// Re-exports for convenient access
pub use gh::GhCli;
pub use url::{
    encode_path_segment, github_base_url, latest_download_url, parse_repo_url,
    release_download_url, repository_web_url,
};
