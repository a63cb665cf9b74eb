//! Wheel selection and ordering

use url::Url;

use crate::github::url::release_download_url;
use crate::source::Release;

/// Filename suffix that marks an asset as a wheel
pub const WHEEL_SUFFIX: &str = ".whl";

/// A wheel filename and its direct download URL
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct WheelLink {
    pub filename: String,
    pub url: String,
}

pub fn is_wheel(filename: &str) -> bool {
    filename.ends_with(WHEEL_SUFFIX)
}

/// Collects every wheel across `releases`, sorted by filename descending.
///
/// The order is plain reverse lexical order, not a version sort. It only
/// matches newest-first while version components are zero-padded; `1.10.0`
/// sorts below `1.9.0`.
pub fn collect_wheels(repo_url: &Url, releases: &[Release]) -> Vec<WheelLink> {
    let mut wheels: Vec<WheelLink> = releases
        .iter()
        .flat_map(|release| {
            release
                .assets
                .iter()
                .filter(|asset| is_wheel(&asset.name))
                .map(|asset| WheelLink {
                    filename: asset.name.clone(),
                    url: release_download_url(repo_url, &release.tag_name, &asset.name),
                })
        })
        .collect();

    wheels.sort_by(|a, b| b.cmp(a));
    wheels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Asset;

    fn repo() -> Url {
        Url::parse("https://github.com/example/dailybpy").unwrap()
    }

    fn release(tag: &str, assets: &[&str]) -> Release {
        Release {
            tag_name: tag.to_string(),
            assets: assets.iter().map(|a| Asset::named(*a)).collect(),
        }
    }

    #[test]
    fn test_is_wheel() {
        assert!(is_wheel("bpy-1.0-cp311-win_amd64.whl"));
        assert!(!is_wheel("bpy-1.0-cp311-win_amd64.whl.sha256"));
        assert!(!is_wheel("bpy-1.0.tar.gz"));
        assert!(!is_wheel("whl"));
    }

    #[test]
    fn test_collect_only_wheels() {
        let releases = vec![release(
            "v1.2.0",
            &["bpy-1.2.0-cp311-win_amd64.whl", "bpy-1.2.0-cp311-win_amd64.tar.gz"],
        )];

        let wheels = collect_wheels(&repo(), &releases);
        assert_eq!(wheels.len(), 1);
        assert_eq!(wheels[0].filename, "bpy-1.2.0-cp311-win_amd64.whl");
        assert_eq!(
            wheels[0].url,
            "https://github.com/example/dailybpy/releases/download/v1.2.0/bpy-1.2.0-cp311-win_amd64.whl"
        );
    }

    #[test]
    fn test_collect_sorts_descending_across_releases() {
        let releases = vec![
            release("v1", &["pkg-1.0.0-py3-none-any.whl"]),
            release("v2", &["pkg-2.0.0-py3-none-any.whl"]),
            release("v1.5", &["pkg-1.5.0-py3-none-any.whl"]),
        ];

        let names: Vec<String> = collect_wheels(&repo(), &releases)
            .into_iter()
            .map(|w| w.filename)
            .collect();
        assert_eq!(
            names,
            vec![
                "pkg-2.0.0-py3-none-any.whl",
                "pkg-1.5.0-py3-none-any.whl",
                "pkg-1.0.0-py3-none-any.whl"
            ]
        );
    }

    #[test]
    fn test_collect_lexical_order_is_not_version_order() {
        let releases = vec![release(
            "v",
            &["pkg-1.9.0-py3-none-any.whl", "pkg-1.10.0-py3-none-any.whl"],
        )];

        let wheels = collect_wheels(&repo(), &releases);
        assert_eq!(wheels[0].filename, "pkg-1.9.0-py3-none-any.whl");
    }

    #[test]
    fn test_collect_keeps_same_filename_from_two_releases() {
        let releases = vec![
            release("nightly-a", &["bpy.whl"]),
            release("nightly-b", &["bpy.whl"]),
        ];

        let wheels = collect_wheels(&repo(), &releases);
        assert_eq!(wheels.len(), 2);
        assert!(wheels[0].url.contains("nightly-b"));
        assert!(wheels[1].url.contains("nightly-a"));
    }

    #[test]
    fn test_collect_empty() {
        assert!(collect_wheels(&repo(), &[]).is_empty());
        assert!(collect_wheels(&repo(), &[release("v1", &[])]).is_empty());
    }
}
