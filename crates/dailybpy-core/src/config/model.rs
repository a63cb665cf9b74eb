use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::consts;
use crate::error::{DailybpyError, Result};

/// dailybpy.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub installer: InstallerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    pub name: String,
    pub module: String,
    pub version: String,
    /// Exact `major.minor` the wheels are built for
    pub python: PythonVersion,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: consts::package::NAME.to_string(),
            module: consts::package::MODULE.to_string(),
            version: consts::package::VERSION.to_string(),
            python: PythonVersion::new(3, 11),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    /// `owner/name` on GitHub
    pub slug: String,
    pub index_url: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            slug: consts::repository::SLUG.to_string(),
            index_url: consts::repository::INDEX_URL.to_string(),
        }
    }
}

impl RepositoryConfig {
    /// Web URL of the repository, used when the release host cannot tell us
    pub fn web_url(&self) -> String {
        format!("https://github.com/{}", self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    pub output_dir: String,
    pub release_limit: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            output_dir: consts::index::OUTPUT_DIR.to_string(),
            release_limit: consts::index::RELEASE_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Interpreter to install into; platform default when unset
    pub python: Option<String>,
}

impl InstallerConfig {
    pub fn python_or_default(&self) -> &str {
        self.python.as_deref().unwrap_or(consts::installer::PYTHON)
    }
}

/// `major.minor` interpreter version, e.g. `3.11`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl PythonVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// CPython wheel tag, e.g. `cp311`
    pub fn cpython_tag(&self) -> String {
        format!("cp{}{}", self.major, self.minor)
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for PythonVersion {
    type Err = DailybpyError;

    /// Accepts `3.11` and full versions such as `3.11.4`; only `major.minor` is kept
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DailybpyError::ConfigInvalidValue {
            field: "python".to_string(),
            reason: format!("expected 'major.minor', got '{}'", s),
        };

        let mut parts = s.trim().split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;

        Ok(Self { major, minor })
    }
}

impl TryFrom<String> for PythonVersion {
    type Error = DailybpyError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PythonVersion> for String {
    fn from(value: PythonVersion) -> Self {
        value.to_string()
    }
}

impl Config {
    /// Reads and validates dailybpy.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DailybpyError::ConfigParseError(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            DailybpyError::ConfigParseError(format!("{}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration for a run.
    ///
    /// An explicit path must exist. Without one, `dailybpy.toml` in `dir` is used
    /// when present; otherwise built-in defaults apply.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = dir.join(consts::CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.package.name.trim().is_empty() {
            return Err(DailybpyError::ConfigInvalidValue {
                field: "package.name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.index.release_limit == 0 {
            return Err(DailybpyError::ConfigInvalidValue {
                field: "index.release_limit".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        validate_slug(&self.repository.slug).map_err(|reason| {
            DailybpyError::ConfigInvalidValue {
                field: "repository.slug".to_string(),
                reason,
            }
        })?;

        Ok(())
    }
}

/// Checks that `slug` has the shape `owner/name`
pub fn validate_slug(slug: &str) -> std::result::Result<(), String> {
    let mut parts = slug.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => Ok(()),
        _ => Err(format!("expected 'owner/name', got '{}'", slug)),
    }
}
