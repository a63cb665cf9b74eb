//! Fake executables for tests that drive external tools
//!
//! Each script appends its arguments to `<name>.calls` next to itself so tests
//! can assert on how a tool was invoked. Scripts only use `/bin/sh` builtins,
//! which keeps them working when `PATH` is restricted to the fake directory.

#![cfg(unix)]

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{FixtureRelease, release_list_json, release_view_json, repo_view_json};
use crate::temp_dir_in_workspace;

/// Quote `s` for a POSIX shell single-quoted string
fn sh_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Directory of fake executables, removed on drop
pub struct FakeBinDir {
    dir: TempDir,
}

impl Default for FakeBinDir {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBinDir {
    pub fn new() -> Self {
        Self {
            dir: temp_dir_in_workspace(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes an executable `/bin/sh` script called `name` and returns its path
    ///
    /// # Panics
    ///
    /// Panics if the script cannot be written or made executable
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        let log = self.calls_path(name);
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$*\" >> {}\n{}\n",
            sh_quote(&log.to_string_lossy()),
            body
        );
        fs::write(&path, script).expect("Failed to write fake script");

        let mut perms = fs::metadata(&path)
            .expect("Failed to stat fake script")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod fake script");
        path
    }

    fn calls_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(format!("{name}.calls"))
    }

    /// Argument lines recorded by the fake `name`, oldest first
    pub fn calls(&self, name: &str) -> Vec<String> {
        fs::read_to_string(self.calls_path(name))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `PATH` value with this directory in front of the current `PATH`
    pub fn path_env(&self) -> OsString {
        let mut paths = vec![self.dir.path().to_path_buf()];
        if let Some(current) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&current));
        }
        std::env::join_paths(paths).expect("PATH entries should be joinable")
    }

    /// `PATH` value containing only this directory
    pub fn isolated_path_env(&self) -> OsString {
        self.dir.path().as_os_str().to_os_string()
    }
}

/// Builder for a fake `gh` that answers the three queries the index builder makes
#[derive(Debug, Clone, Default)]
pub struct FakeGh {
    repo_url: Option<String>,
    releases: Vec<FixtureRelease>,
    list_failure: Option<(i32, String)>,
    raw_list: Option<String>,
}

impl FakeGh {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL printed by `gh repo view`; without one that command fails
    pub fn repo_url(mut self, url: &str) -> Self {
        self.repo_url = Some(url.to_string());
        self
    }

    pub fn release(mut self, tag: &str, assets: &[&str]) -> Self {
        self.releases.push(FixtureRelease::new(tag, assets));
        self
    }

    /// Makes `gh release list` exit with `code` after printing `stderr`
    pub fn fail_list(mut self, code: i32, stderr: &str) -> Self {
        self.list_failure = Some((code, stderr.to_string()));
        self
    }

    /// Replaces the `gh release list` output with arbitrary text
    pub fn raw_list_output(mut self, output: &str) -> Self {
        self.raw_list = Some(output.to_string());
        self
    }

    /// Writes the script into `bin` as `gh`
    pub fn install(&self, bin: &FakeBinDir) -> PathBuf {
        bin.write_script("gh", &self.script())
    }

    fn script(&self) -> String {
        let repo_branch = match &self.repo_url {
            Some(url) => format!(
                "printf '%s\\n' {}; exit 0",
                sh_quote(&repo_view_json(url))
            ),
            None => "echo 'no git remotes found' >&2; exit 1".to_string(),
        };

        let list_branch = match (&self.list_failure, &self.raw_list) {
            (Some((code, stderr)), _) => {
                format!("printf '%s\\n' {} >&2; exit {}", sh_quote(stderr), code)
            }
            (None, Some(raw)) => format!("printf '%s\\n' {}; exit 0", sh_quote(raw)),
            (None, None) => format!(
                "printf '%s\\n' {}; exit 0",
                sh_quote(&release_list_json(&self.releases))
            ),
        };

        let mut view_cases = String::new();
        for release in &self.releases {
            view_cases.push_str(&format!(
                "      {}) printf '%s\\n' {}; exit 0;;\n",
                sh_quote(&release.tag),
                sh_quote(&release_view_json(release))
            ));
        }

        format!(
            r#"case "$1 $2" in
  "repo view")
    {repo_branch};;
  "release list")
    {list_branch};;
  "release view")
    case "$3" in
{view_cases}      *) echo "release not found" >&2; exit 1;;
    esac;;
esac
echo "unknown command: $*" >&2
exit 1"#
        )
    }
}

/// Builder for a fake Python interpreter with a `pip` module
#[derive(Debug, Clone)]
pub struct FakePython {
    version: String,
    pip_exit: i32,
    import_ok: bool,
}

impl Default for FakePython {
    fn default() -> Self {
        Self {
            version: "3.11".to_string(),
            pip_exit: 0,
            import_ok: true,
        }
    }
}

impl FakePython {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn pip_exit(mut self, code: i32) -> Self {
        self.pip_exit = code;
        self
    }

    pub fn import_ok(mut self, ok: bool) -> Self {
        self.import_ok = ok;
        self
    }

    /// Writes the script into `bin` as `name`
    pub fn install(&self, bin: &FakeBinDir, name: &str) -> PathBuf {
        let import_branch = if self.import_ok {
            "printf '%s\\n' 'Blender 5.1.0 Alpha loaded successfully'; exit 0"
        } else {
            "echo \"ModuleNotFoundError: No module named 'bpy'\" >&2; exit 1"
        };

        let body = format!(
            r#"if [ "$1" = "-c" ]; then
  case "$2" in
    *version_info*) printf '%s\n' {version}; exit 0;;
    *) {import_branch};;
  esac
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
  echo "Processing $4"
  exit {pip_exit}
fi
exit 2"#,
            version = sh_quote(&self.version),
            pip_exit = self.pip_exit,
        );
        bin.write_script(name, &body)
    }
}
