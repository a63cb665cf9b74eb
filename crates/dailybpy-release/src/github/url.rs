//! URL construction helpers for GitHub release downloads

use dailybpy_core::config::model::validate_slug;
use dailybpy_core::DailybpyError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

/// Bytes left as-is in a path segment: ASCII alphanumerics and `-._~`
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds GitHub base URL
pub fn github_base_url() -> Result<Url, url::ParseError> {
    Url::parse("https://github.com")
}

/// Percent-encodes a single path segment
///
/// Stricter than the WHATWG path set: `&`, `'`, `+` and `/` are encoded too,
/// so the result is safe inside a quoted HTML attribute.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Parses a repository web URL such as `https://github.com/owner/name`
pub fn parse_repo_url(raw: &str) -> Result<Url, DailybpyError> {
    let invalid = |reason: String| DailybpyError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) repository URL".to_string()));
    }
    Ok(url)
}

/// Web URL of `owner/name` on github.com
pub fn repository_web_url(slug: &str) -> Result<Url, DailybpyError> {
    validate_slug(slug).map_err(|reason| DailybpyError::ConfigInvalidValue {
        field: "repo".to_string(),
        reason,
    })?;

    let mut url = github_base_url().map_err(|e| DailybpyError::InvalidUrl {
        url: "https://github.com".to_string(),
        reason: e.to_string(),
    })?;
    // Clone URL before mutable borrow to avoid borrow checker error
    let url_for_error = url.to_string();
    url.path_segments_mut()
        .map_err(|_| DailybpyError::InvalidUrl {
            url: url_for_error,
            reason: "URL cannot be a base".to_string(),
        })?
        .clear()
        .extend(slug.split('/'));
    Ok(url)
}

/// `<repo_url>/releases/download/<tag>/<filename>`
pub fn release_download_url(repo_url: &Url, tag: &str, filename: &str) -> String {
    format!(
        "{}/releases/download/{}/{}",
        repo_url.as_str().trim_end_matches('/'),
        encode_path_segment(tag),
        encode_path_segment(filename)
    )
}

/// `https://github.com/<owner/name>/releases/latest/download/<filename>`
pub fn latest_download_url(slug: &str, filename: &str) -> Result<String, DailybpyError> {
    let repo = repository_web_url(slug)?;
    Ok(format!(
        "{}/releases/latest/download/{}",
        repo.as_str().trim_end_matches('/'),
        encode_path_segment(filename)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_segment_keeps_wheel_names() {
        let name = "bpy-5.1.0a0-cp311-cp311-manylinux_2_39_x86_64.whl";
        assert_eq!(encode_path_segment(name), name);
    }

    #[test]
    fn test_encode_path_segment_escapes_reserved() {
        assert_eq!(encode_path_segment("a&b<c>.whl"), "a%26b%3Cc%3E.whl");
        assert_eq!(encode_path_segment("it's here.whl"), "it%27s%20here.whl");
        assert_eq!(encode_path_segment("a/b+c"), "a%2Fb%2Bc");
    }

    #[test]
    fn test_parse_repo_url() {
        let url = parse_repo_url("https://github.com/BradyAJohnston/dailybpy").unwrap();
        assert_eq!(url.path(), "/BradyAJohnston/dailybpy");

        assert!(parse_repo_url("not a url").is_err());
        assert!(parse_repo_url("mailto:someone@example.com").is_err());
        assert!(parse_repo_url("ftp://github.com/a/b").is_err());
    }

    #[test]
    fn test_release_download_url() {
        let repo = parse_repo_url("https://github.com/example/dailybpy").unwrap();
        assert_eq!(
            release_download_url(&repo, "v1.2.0", "bpy-1.2.0-cp311-win_amd64.whl"),
            "https://github.com/example/dailybpy/releases/download/v1.2.0/bpy-1.2.0-cp311-win_amd64.whl"
        );
    }

    #[test]
    fn test_release_download_url_trailing_slash() {
        let repo = parse_repo_url("https://github.com/example/dailybpy/").unwrap();
        assert_eq!(
            release_download_url(&repo, "nightly", "x.whl"),
            "https://github.com/example/dailybpy/releases/download/nightly/x.whl"
        );
    }

    #[test]
    fn test_repository_web_url() {
        let url = repository_web_url("BradyAJohnston/dailybpy").unwrap();
        assert_eq!(url.as_str(), "https://github.com/BradyAJohnston/dailybpy");
        assert!(repository_web_url("no-slash").is_err());
    }

    #[test]
    fn test_latest_download_url() {
        let url = latest_download_url(
            "BradyAJohnston/dailybpy",
            "bpy-5.1.0a0-cp311-cp311-win_amd64.whl",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://github.com/BradyAJohnston/dailybpy/releases/latest/download/bpy-5.1.0a0-cp311-cp311-win_amd64.whl"
        );
    }
}
