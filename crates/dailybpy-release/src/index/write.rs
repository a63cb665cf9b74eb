//! Atomic replacement of the generated index directory
//!
//! The site is written into a staging directory next to the destination and
//! swapped in with renames, so readers see either the previous index or the
//! complete new one. A crash leaves at most a stray hidden staging directory.

use dailybpy_core::{DailybpyError, Result};
use log::{debug, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A file of the generated site, relative to the index root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

impl SiteFile {
    pub fn new(relative_path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            contents: contents.into(),
        }
    }
}

fn write_failed(operation: String) -> impl FnOnce(io::Error) -> DailybpyError {
    move |source| DailybpyError::IndexWriteFailed { operation, source }
}

fn write_synced(path: &Path, contents: &str) -> Result<()> {
    let mut file =
        fs::File::create(path).map_err(write_failed(format!("create {}", path.display())))?;
    file.write_all(contents.as_bytes())
        .map_err(write_failed(format!("write {}", path.display())))?;
    file.sync_all()
        .map_err(write_failed(format!("sync {}", path.display())))?;
    Ok(())
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<()> {
    let handle =
        fs::File::open(dir).map_err(write_failed(format!("open directory {}", dir.display())))?;
    handle
        .sync_all()
        .map_err(write_failed(format!("sync directory {}", dir.display())))
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}

/// Replaces `output_dir` with a directory containing exactly `files`.
///
/// Returns the absolute paths written, in `files` order.
pub fn write_site_atomically(output_dir: &Path, files: &[SiteFile]) -> Result<Vec<PathBuf>> {
    let dir_name = output_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| DailybpyError::IndexWriteFailed {
            operation: format!("resolve output directory {}", output_dir.display()),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no final component"),
        })?;

    let parent = match output_dir.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .map_err(write_failed(format!("create {}", parent.display())))?;

    // Staging and backup live beside the destination so renames stay on one filesystem
    let staging = tempfile::Builder::new()
        .prefix(&format!(".{dir_name}.staging-"))
        .tempdir_in(&parent)
        .map_err(write_failed(format!(
            "create staging directory in {}",
            parent.display()
        )))?;

    for file in files {
        let path = staging.path().join(&file.relative_path);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_failed(format!("create {}", dir.display())))?;
        }
        write_synced(&path, &file.contents)?;
    }
    debug!("staged {} files in {}", files.len(), staging.path().display());

    let backup_holder = tempfile::Builder::new()
        .prefix(&format!(".{dir_name}.previous-"))
        .tempdir_in(&parent)
        .map_err(write_failed(format!(
            "create backup directory in {}",
            parent.display()
        )))?;
    let backup = backup_holder.path().join(&dir_name);

    let had_previous = output_dir.exists();
    if had_previous {
        fs::rename(output_dir, &backup).map_err(write_failed(format!(
            "move previous index {} aside",
            output_dir.display()
        )))?;
    }

    if let Err(e) = fs::rename(staging.path(), output_dir) {
        if had_previous && fs::rename(&backup, output_dir).is_err() {
            let kept = backup_holder.keep();
            warn!("previous index left at {}", kept.join(&dir_name).display());
        }
        return Err(DailybpyError::IndexWriteFailed {
            operation: format!("move new index into {}", output_dir.display()),
            source: e,
        });
    }
    sync_dir(&parent)?;

    // Dropping the holder removes the previous index; the staging TempDir
    // now points at a moved path and its cleanup is a no-op.
    drop(backup_holder);
    drop(staging);

    let root = fs::canonicalize(output_dir)
        .map_err(write_failed(format!("resolve {}", output_dir.display())))?;
    Ok(files
        .iter()
        .map(|file| root.join(&file.relative_path))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dailybpy_testkit::temp_dir_in_workspace;

    fn site() -> Vec<SiteFile> {
        vec![
            SiteFile::new("index.html", "root"),
            SiteFile::new("bpy/index.html", "package"),
            SiteFile::new("README.md", "readme"),
        ]
    }

    fn hidden_entries(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with('.'))
            .collect()
    }

    #[test]
    fn test_writes_all_files() {
        let temp = temp_dir_in_workspace();
        let out = temp.path().join("simple");

        let written = write_site_atomically(&out, &site()).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.is_absolute() && p.exists()));
        assert_eq!(fs::read_to_string(out.join("bpy/index.html")).unwrap(), "package");
        assert_eq!(fs::read_to_string(out.join("README.md")).unwrap(), "readme");
    }

    #[test]
    fn test_replaces_existing_directory_wholesale() {
        let temp = temp_dir_in_workspace();
        let out = temp.path().join("simple");
        fs::create_dir_all(out.join("stale-package")).unwrap();
        fs::write(out.join("stale-package/index.html"), "old").unwrap();
        fs::write(out.join("index.html"), "old root").unwrap();

        write_site_atomically(&out, &site()).unwrap();

        assert!(!out.join("stale-package").exists());
        assert_eq!(fs::read_to_string(out.join("index.html")).unwrap(), "root");
    }

    #[test]
    fn test_leaves_no_staging_or_backup_behind() {
        let temp = temp_dir_in_workspace();
        let out = temp.path().join("simple");
        fs::create_dir_all(&out).unwrap();

        write_site_atomically(&out, &site()).unwrap();
        assert!(hidden_entries(temp.path()).is_empty());
    }

    #[test]
    fn test_creates_missing_parent() {
        let temp = temp_dir_in_workspace();
        let out = temp.path().join("public").join("simple");

        write_site_atomically(&out, &site()).unwrap();
        assert!(out.join("index.html").exists());
    }

    #[test]
    fn test_rejects_path_without_name() {
        let err = write_site_atomically(Path::new("/"), &site()).unwrap_err();
        assert!(err.to_string().starts_with("INDEX_WRITE_FAILED"));
    }
}
