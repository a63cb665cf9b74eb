//! Release catalog, package index and installer logic for dailybpy.
//!
//! This crate turns the GitHub releases of a repository into a static
//! PEP 503 package index, and installs the matching wheel on a user's machine.
//!
//! # Architecture
//!
//! - [`source`]: release records and the [`source::ReleaseSource`] capability
//! - [`github`]: `gh` CLI backed source and download URL construction
//! - [`index`]: wheel collection, page rendering and atomic site replacement
//! - [`install`]: platform resolution, interpreter probing and `pip`/`uv`
//! - [`exec`]: synchronous subprocess execution shared by all of the above
//!
//! # Examples
//!
//! ```no_run
//! use dailybpy_core::Config;
//! use dailybpy_release::{GhCli, build_index};
//! use std::path::Path;
//!
//! # fn main() -> dailybpy_core::Result<()> {
//! let config = Config::default();
//! let summary = build_index(&GhCli::new(), &config, Path::new("simple"))?;
//! println!(
//!     "{} wheels from {} releases",
//!     summary.wheel_count, summary.release_count
//! );
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod exec;
pub mod github;
pub mod index;
pub mod install;
pub mod source;

// Re-export commonly used types
pub use github::GhCli;
pub use index::{IndexSummary, build_index};
pub use install::{InstallPlan, Verification, install_and_verify, plan_install};
pub use source::{ReleaseSource, fetch_releases};

// Type alias for convenience
pub type Result<T> = dailybpy_core::Result<T>;
