//! Asset folder enumeration.
//!
//! Walks the user's chosen asset folder and produces one [`FolderEntry`]
//! per file, sorted by relative path. The model only ever consumes
//! [`FolderEntry::relative_path`]; the remaining fields exist for display.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;
use crate::model::PathSource;

/// One candidate file beneath the asset root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Path relative to the asset root, forward-slash separated.
    pub relative_path: String,
    /// The file name alone.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Content type guessed from the extension.
    pub mime_type: String,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

impl PathSource for FolderEntry {
    fn relative_path(&self) -> &str {
        &self.relative_path
    }
}

#[cfg(test)]
impl FolderEntry {
    pub fn for_tests(relative_path: &str) -> Self {
        let name = relative_path
            .rsplit('/')
            .next()
            .unwrap_or(relative_path)
            .to_string();
        Self {
            mime_type: mime_type_for(&name).to_string(),
            relative_path: relative_path.to_string(),
            name,
            size: 0,
            modified: Utc::now(),
        }
    }
}

/// Recursively enumerate `root`, skipping hidden directories.
///
/// When `extensions` is non-empty, only files whose extension matches one
/// of the entries (given with a leading dot, e.g. `".png"`) are returned.
pub fn scan_folder(root: &Path, extensions: &[String]) -> Result<Vec<FolderEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !extensions.is_empty() && !matches_extension(&name, extensions) {
            continue;
        }

        let relative_path = relative_path_string(entry.path(), root);
        let metadata = entry.metadata().map_err(std::io::Error::from)?;

        entries.push(FolderEntry {
            relative_path,
            mime_type: mime_type_for(&name).to_string(),
            name,
            size: metadata.len(),
            modified: DateTime::<Utc>::from(metadata.modified()?),
        });
    }

    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!(root = %root.display(), count = entries.len(), "scanned folder");
    Ok(entries)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn matches_extension(name: &str, extensions: &[String]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Relative path with forward slashes, regardless of platform.
fn relative_path_string(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn mime_type_for(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_scan_returns_sorted_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("z.png"));
        touch(&dir.path().join("goblin/idle.png"));
        touch(&dir.path().join("goblin/walk.png"));

        let entries = scan_folder(dir.path(), &[]).unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["goblin/idle.png", "goblin/walk.png", "z.png"]);
    }

    #[test]
    fn test_scan_skips_hidden_directories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("visible.png"));
        touch(&dir.path().join(".hidden/secret.png"));

        let entries = scan_folder(dir.path(), &[]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].relative_path, "visible.png");
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.png"));
        touch(&dir.path().join("b.txt"));
        touch(&dir.path().join("c.PNG"));

        let entries = scan_folder(dir.path(), &[".png".to_string()]).unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["a.png", "c.PNG"]);
    }

    #[test]
    fn test_scan_fills_entry_fields() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("goblin/idle.png"));

        let entries = scan_folder(dir.path(), &[]).unwrap();
        let entry = &entries[0];
        assert_eq!(entry.name, "idle.png");
        assert_eq!(entry.size, 1);
        assert_eq!(entry.mime_type, "image/png");
    }

    #[test]
    fn test_mime_type_fallback() {
        assert_eq!(mime_type_for("a.png"), "image/png");
        assert_eq!(mime_type_for("b.JPG"), "image/jpeg");
        assert_eq!(mime_type_for("noext"), "application/octet-stream");
    }
}
