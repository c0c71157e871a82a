//! The tag/path data model.
//!
//! A [`TagStore`] maps user-chosen tag names to sorted, duplicate-free lists
//! of asset paths, carries the opaque `sets` structure of a Dungeondraft tag
//! file through unchanged, and applies a uniform path prefix.
//!
//! Every mutating operation takes `&self` and returns a fresh `TagStore`.
//! Callers holding older snapshots are never affected, so a UI (or a test)
//! can compare previous/next states freely and concurrent readers never see
//! a half-applied change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, TagsmithError};

/// The prefix Dungeondraft expects in front of every asset path.
pub const DEFAULT_PREFIX: &str = "textures/";

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Anything that can stand in for an asset path: a plain string, or a
/// path-bearing record such as [`crate::scan::FolderEntry`].
pub trait PathSource {
    /// The path relative to the asset root, without any prefix.
    fn relative_path(&self) -> &str;
}

impl PathSource for str {
    fn relative_path(&self) -> &str {
        self
    }
}

impl PathSource for String {
    fn relative_path(&self) -> &str {
        self
    }
}

impl<T: PathSource + ?Sized> PathSource for &T {
    fn relative_path(&self) -> &str {
        (**self).relative_path()
    }
}

/// The tag → paths mapping, plus the pass-through `sets` structure and the
/// path prefix.
///
/// Tag keys iterate in ascending order (the map is a `BTreeMap`), and every
/// path list is kept sorted and duplicate-free by the mutation operations.
/// The serde implementation covers the internal working file only; the
/// interchange format is produced by [`TagStore::to_json`] and read back by
/// [`TagStore::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagStore {
    #[serde(default)]
    tags: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    sets: Map<String, Value>,

    #[serde(default = "default_prefix")]
    prefix: String,
}

impl Default for TagStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Interchange form of a tag file: exactly the two fields Dungeondraft
/// reads. The prefix is a runtime normalization detail and is not part of
/// the format.
#[derive(Serialize)]
struct ExportDocument<'a> {
    tags: &'a BTreeMap<String, Vec<String>>,
    sets: &'a Map<String, Value>,
}

impl TagStore {
    pub fn new() -> Self {
        Self {
            tags: BTreeMap::new(),
            sets: Map::new(),
            prefix: default_prefix(),
        }
    }

    /// Parse interchange text and reconstruct through the repair pass.
    ///
    /// Fails only when the bytes are not parseable JSON at all; no partial
    /// result is fabricated from unparseable input.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(text)?;
        Ok(Self::from_document(&doc))
    }

    /// Reconstruct a store from a previously exported document.
    ///
    /// This is the repair pass, and the only way externally authored data
    /// enters the model. It tolerates and corrects:
    /// - a missing or non-object `tags` field (empty mapping)
    /// - a non-array value for a tag key (tag kept, empty list)
    /// - non-string entries inside a path list (dropped)
    /// - unsorted or duplicated paths
    /// - paths missing the uniform prefix
    pub fn from_document(doc: &Value) -> Self {
        let mut store = Self::new();

        if let Some(tags) = doc.get("tags").and_then(Value::as_object) {
            for (tag, paths) in tags {
                let normalized: Vec<String> = paths
                    .as_array()
                    .map(|list| {
                        list.iter()
                            .filter_map(Value::as_str)
                            .map(|path| store.ensure_prefixed(path))
                            .collect()
                    })
                    .unwrap_or_default();
                // Prefixing already happened above, so skip it here.
                store = store.set_files_for_tag(tag, &normalized, true);
            }
        }

        if let Some(sets) = doc.get("sets").and_then(Value::as_object) {
            store.sets = sets.clone();
        }

        store
    }

    fn ensure_prefixed(&self, path: &str) -> String {
        if path.starts_with(self.prefix.as_str()) {
            path.to_string()
        } else {
            format!("{}{}", self.prefix, path)
        }
    }

    /// Ensure `name` is a tag. Adding an existing tag changes nothing.
    pub fn add_tag(&self, name: &str) -> TagStore {
        if self.tags.contains_key(name) {
            return self.clone();
        }
        debug!(tag = name, "adding tag");
        let mut next = self.clone();
        next.tags.insert(name.to_string(), Vec::new());
        next
    }

    /// Remove a tag and its entire path list. There is no way to restore
    /// the selection afterwards.
    pub fn remove_tag(&self, name: &str) -> TagStore {
        let mut next = self.clone();
        next.tags.remove(name);
        next
    }

    /// Replace the path list for `tag` with `files`, creating the tag if
    /// needed. The incoming list is prefixed (unless `skip_prefixing`,
    /// which only reconstruction uses), deduplicated, and sorted.
    ///
    /// Paths previously associated with the tag but absent from `files` are
    /// dropped. This is how selections reconcile with the currently browsed
    /// folder: files no longer visible are never re-supplied and disappear
    /// on the next save of the tag's selection.
    pub fn set_files_for_tag<P: PathSource>(
        &self,
        tag: &str,
        files: &[P],
        skip_prefixing: bool,
    ) -> TagStore {
        debug!(tag, count = files.len(), "replacing files for tag");
        let mut next = self.add_tag(tag);
        let mut paths: Vec<String> = files
            .iter()
            .map(|file| {
                if skip_prefixing {
                    file.relative_path().to_string()
                } else {
                    format!("{}{}", self.prefix, file.relative_path())
                }
            })
            .collect();
        paths.sort();
        paths.dedup();
        next.tags.insert(tag.to_string(), paths);
        next
    }

    /// Add paths to `tag` without touching its existing selection,
    /// creating the tag if needed. Already-present paths are skipped.
    pub fn add_files_to_tag<P: PathSource>(&self, tag: &str, files: &[P]) -> TagStore {
        debug!(tag, count = files.len(), "adding files to tag");
        let mut next = self.add_tag(tag);
        let list = next.tags.entry(tag.to_string()).or_default();
        for file in files {
            let path = format!("{}{}", self.prefix, file.relative_path());
            if !list.contains(&path) {
                list.push(path);
            }
        }
        list.sort();
        next
    }

    /// Remove each of the given paths from `tag`'s selection, creating the
    /// tag if needed. Paths not present are ignored.
    pub fn remove_files_from_tag<P: PathSource>(&self, tag: &str, files: &[P]) -> TagStore {
        debug!(tag, count = files.len(), "removing files from tag");
        let mut next = self.add_tag(tag);
        let doomed: Vec<String> = files
            .iter()
            .map(|file| format!("{}{}", self.prefix, file.relative_path()))
            .collect();
        let list = next.tags.entry(tag.to_string()).or_default();
        list.retain(|path| !doomed.contains(path));
        next
    }

    /// Rewrite every stored path under `new_prefix`: a literal leading
    /// occurrence of the current prefix is replaced, anything else gets
    /// `new_prefix` prepended. Occurrences of the prefix text elsewhere in
    /// a path are left alone.
    pub fn change_file_prefix(&self, new_prefix: &str) -> TagStore {
        debug!(from = %self.prefix, to = new_prefix, "changing file prefix");
        let mut next = self.clone();
        for paths in next.tags.values_mut() {
            for path in paths.iter_mut() {
                *path = match path.strip_prefix(self.prefix.as_str()) {
                    Some(rest) => format!("{}{}", new_prefix, rest),
                    None => format!("{}{}", new_prefix, path),
                };
            }
            paths.sort();
            paths.dedup();
        }
        next.prefix = new_prefix.to_string();
        next
    }

    /// Tag names in ascending order.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.keys().cloned().collect()
    }

    /// The stored (prefixed) path list for a tag; empty for an absent tag.
    pub fn paths_for_tag(&self, tag: &str) -> &[String] {
        self.tags.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The path list for a tag with the leading prefix stripped; empty for
    /// an absent tag, never fails.
    pub fn paths_for_tag_without_prefix(&self, tag: &str) -> Vec<String> {
        self.paths_for_tag(tag)
            .iter()
            .map(|path| {
                path.strip_prefix(self.prefix.as_str())
                    .unwrap_or(path)
                    .to_string()
            })
            .collect()
    }

    pub fn tag_exists(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The export document as a JSON value: `tags` and `sets`, nothing else.
    pub fn export_document(&self) -> Value {
        serde_json::json!({ "tags": self.tags, "sets": self.sets })
    }

    /// Render the export document as text. Dungeondraft's own files are
    /// tab-indented, so the pretty-printer matches that.
    pub fn to_json(&self) -> Result<String> {
        let doc = ExportDocument {
            tags: &self.tags,
            sets: &self.sets,
        };
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|e| TagsmithError::Store(format!("export rendered invalid UTF-8: {e}")))
    }
}
