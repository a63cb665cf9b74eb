//! Installing the published wheel for the current machine
//!
//! ```text
//! detect_platform() → WheelSpec::filename() → latest_download_url()
//!     ↓
//! Interpreter::version() → check_version() → confirm_mismatch()
//!     ↓
//! PackageInstaller::install(url)
//!     ↓
//! Interpreter::import_check(module)   (optional, failure is only a warning)
//! ```

pub mod gate;
pub mod installer;
pub mod platform;
pub mod python;
pub mod wheel;

pub use gate::{Prompt, TerminalPrompt, VersionCheck, check_version, confirm_mismatch};
pub use installer::{InstallerKind, PackageInstaller, ToolInstaller};
pub use platform::{PlatformTag, SUPPORTED_PLATFORMS, detect_platform, resolve_platform};
pub use python::{Interpreter, PythonInterpreter};
pub use wheel::WheelSpec;

use dailybpy_core::{DailybpyError, Result};
use log::{debug, info};

use crate::github::url::latest_download_url;

/// What will be installed and from where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub platform: PlatformTag,
    pub wheel_name: String,
    pub wheel_url: String,
}

/// Resolves the wheel of the latest release of `slug` for `platform`
pub fn plan_install(spec: &WheelSpec, platform: PlatformTag, slug: &str) -> Result<InstallPlan> {
    let wheel_name = spec.filename(platform);
    let wheel_url = latest_download_url(slug, &wheel_name)?;
    debug!("planned {} from {}", wheel_name, wheel_url);
    Ok(InstallPlan {
        platform,
        wheel_name,
        wheel_url,
    })
}

/// Outcome of the post-install import check
#[derive(Debug)]
pub enum Verification {
    Skipped,
    /// Carries the line the interpreter printed
    Passed(String),
    Failed(DailybpyError),
}

/// Installs the planned wheel and, unless `skip_check`, imports `module`.
///
/// Installer failures are returned as errors. A failed import is reported in
/// the [`Verification`] value since the package itself did install.
pub fn install_and_verify(
    plan: &InstallPlan,
    installer: &impl PackageInstaller,
    interpreter: &impl Interpreter,
    module: &str,
    skip_check: bool,
) -> Result<Verification> {
    info!("installing {} with {}", plan.wheel_name, installer.kind());
    installer.install(&plan.wheel_url)?;

    if skip_check {
        return Ok(Verification::Skipped);
    }

    match interpreter.import_check(module) {
        Ok(line) => Ok(Verification::Passed(line)),
        Err(e) if e.is_warning() => Ok(Verification::Failed(e)),
        Err(e) => Ok(Verification::Failed(DailybpyError::VerificationFailed(
            e.to_string(),
        ))),
    }
}
