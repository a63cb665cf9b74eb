use dailybpy_core::config::{PackageConfig, PythonVersion};

use super::platform::PlatformTag;

/// The wheel a given interpreter and platform should install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelSpec {
    pub distribution: String,
    pub version: String,
    pub python: PythonVersion,
}

impl WheelSpec {
    pub fn from_config(package: &PackageConfig) -> Self {
        Self {
            distribution: package.name.clone(),
            version: package.version.clone(),
            python: package.python,
        }
    }

    /// `{dist}-{version}-cpXY-cpXY-{platform}.whl`
    pub fn filename(&self, platform: PlatformTag) -> String {
        let tag = self.python.cpython_tag();
        format!(
            "{}-{}-{tag}-{tag}-{}",
            self.distribution.replace('-', "_"),
            self.version,
            platform.wheel_suffix()
        )
    }
}
