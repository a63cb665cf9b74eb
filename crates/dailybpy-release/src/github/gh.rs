//! Release metadata through the GitHub CLI
//!
//! `gh` must be on PATH and already authenticated. Every query runs `gh` with
//! `--json` and parses the output into typed records.

use dailybpy_core::{DailybpyError, Result};
use serde::de::DeserializeOwned;
use url::Url;

use crate::exec::{self, ToolCommand};
use crate::github::url::parse_repo_url;
use crate::source::{Asset, AssetList, ReleaseSource, ReleaseSummary, RepoView};

/// Default executable name
pub const GH_PROGRAM: &str = "gh";

/// [`ReleaseSource`] backed by the `gh` CLI
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    /// `owner/name`; `None` lets `gh` infer the repository from the working directory
    repo: Option<String>,
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GhCli {
    pub fn new() -> Self {
        Self {
            program: GH_PROGRAM.to_string(),
            repo: None,
        }
    }

    /// Uses a specific `gh` executable instead of the one on PATH
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Targets `owner/name` instead of the current directory's repository
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    fn release_command(&self, args: &[&str]) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.program).args(["release"]);
        cmd = cmd.args(args.iter().copied());
        if let Some(repo) = &self.repo {
            cmd = cmd.args(["--repo", repo.as_str()]);
        }
        cmd
    }

    fn repo_command(&self) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.program).args(["repo", "view"]);
        if let Some(repo) = &self.repo {
            cmd = cmd.arg(repo.as_str());
        }
        cmd.args(["--json", "url"])
    }

    /// Runs `cmd` and parses stdout as `T`
    fn query<T: DeserializeOwned>(&self, cmd: &ToolCommand) -> Result<T> {
        let output = exec::run_checked(cmd)?;
        serde_json::from_str(&output.stdout).map_err(|e| DailybpyError::InvalidReleaseData {
            context: format!("`{}`", cmd),
            reason: e.to_string(),
        })
    }
}

impl ReleaseSource for GhCli {
    fn repository_url(&self) -> Result<Url> {
        let view: RepoView = self.query(&self.repo_command())?;
        parse_repo_url(&view.url)
    }

    fn list_releases(&self, limit: usize) -> Result<Vec<ReleaseSummary>> {
        let limit = limit.to_string();
        let cmd = self.release_command(&["list", "--json", "tagName", "--limit", &limit]);
        self.query(&cmd)
    }

    fn release_assets(&self, tag: &str) -> Result<Vec<Asset>> {
        let cmd = self.release_command(&["view", tag, "--json", "assets"]);
        let list: AssetList = self.query(&cmd)?;
        Ok(list.assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_command_without_repo() {
        let gh = GhCli::new();
        let cmd = gh.release_command(&["list", "--json", "tagName", "--limit", "100"]);
        assert_eq!(cmd.to_string(), "gh release list --json tagName --limit 100");
    }

    #[test]
    fn test_release_command_with_repo() {
        let gh = GhCli::new().with_repo("owner/name");
        let cmd = gh.release_command(&["view", "v1", "--json", "assets"]);
        assert_eq!(
            cmd.to_string(),
            "gh release view v1 --json assets --repo owner/name"
        );
    }

    #[test]
    fn test_repo_command() {
        assert_eq!(GhCli::new().repo_command().to_string(), "gh repo view --json url");
        assert_eq!(
            GhCli::new().with_repo("o/r").repo_command().to_string(),
            "gh repo view o/r --json url"
        );
    }

    #[test]
    fn test_missing_gh_is_external_tool_missing() {
        let gh = GhCli::new().with_program("dailybpy-no-such-gh");
        let err = gh.list_releases(100).unwrap_err();
        assert!(matches!(err, DailybpyError::ExternalToolMissing { .. }));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use dailybpy_testkit::{FakeBinDir, FakeGh};

        fn fake(bin: &FakeBinDir, gh: FakeGh) -> GhCli {
            let path = gh.install(bin);
            GhCli::new().with_program(path.to_string_lossy())
        }

        #[test]
        fn test_repository_url() {
            let bin = FakeBinDir::new();
            let gh = fake(&bin, FakeGh::new().repo_url("https://github.com/example/dailybpy"));
            let url = gh.repository_url().unwrap();
            assert_eq!(url.as_str(), "https://github.com/example/dailybpy");
        }

        #[test]
        fn test_repository_url_failure() {
            let bin = FakeBinDir::new();
            let gh = fake(&bin, FakeGh::new());
            let err = gh.repository_url().unwrap_err();
            assert!(err.to_string().contains("no git remotes found"));
        }

        #[test]
        fn test_list_releases_passes_limit() {
            let bin = FakeBinDir::new();
            let gh = fake(
                &bin,
                FakeGh::new().release("v2", &[]).release("v1", &[]),
            );

            let releases = gh.list_releases(100).unwrap();
            assert_eq!(
                releases.iter().map(|r| r.tag_name.as_str()).collect::<Vec<_>>(),
                vec!["v2", "v1"]
            );
            assert_eq!(bin.calls("gh"), vec!["release list --json tagName --limit 100"]);
        }

        #[test]
        fn test_release_assets() {
            let bin = FakeBinDir::new();
            let gh = fake(
                &bin,
                FakeGh::new().release("v1.2.0", &["a.whl", "a.tar.gz"]),
            );

            let assets = gh.release_assets("v1.2.0").unwrap();
            assert_eq!(assets.len(), 2);
            assert_eq!(assets[0].name, "a.whl");
        }

        #[test]
        fn test_list_failure_carries_stderr() {
            let bin = FakeBinDir::new();
            let gh = fake(
                &bin,
                FakeGh::new().fail_list(4, "gh auth login required"),
            );

            let err = gh.list_releases(100).unwrap_err();
            match err {
                DailybpyError::ExternalToolFailed { status, stderr, .. } => {
                    assert_eq!(status, Some(4));
                    assert!(stderr.contains("gh auth login required"));
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_malformed_list_names_missing_field() {
            let bin = FakeBinDir::new();
            let gh = fake(&bin, FakeGh::new().raw_list_output(r#"[{"name":"x"}]"#));

            let err = gh.list_releases(100).unwrap_err();
            let msg = err.to_string();
            assert!(msg.starts_with("RELEASE_DATA_INVALID"), "got: {msg}");
            assert!(msg.contains("tagName"), "got: {msg}");
            assert!(msg.contains("release list"), "got: {msg}");
        }
    }
}
