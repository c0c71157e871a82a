use crate::commands::{CmdMessage, CmdResult, ScanEntry};
use crate::error::Result;
use crate::scan::scan_folder;
use crate::store::DocumentStore;

/// List the asset folder's candidate files, marking the ones already in
/// the active tag's selection.
pub fn run<S: DocumentStore>(store: &S, extensions: &[String]) -> Result<CmdResult> {
    let session = store.load_session()?;
    let root = session.require_asset_root()?;

    let entries = scan_folder(root, extensions)?;

    let tag_store = store.load_store()?;
    let chosen = session
        .active_tag
        .as_deref()
        .map(|tag| tag_store.paths_for_tag_without_prefix(tag))
        .unwrap_or_default();

    let listed: Vec<ScanEntry> = entries
        .into_iter()
        .map(|entry| ScanEntry {
            selected: chosen.contains(&entry.relative_path),
            entry,
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No matching files in the asset folder."));
    }
    Ok(result.with_listed_entries(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::session::{set_folder, use_tag};
    use crate::commands::tagging::tag_files;
    use crate::error::TagsmithError;
    use crate::store::memory::InMemoryStore;
    use std::fs;

    #[test]
    fn test_scan_requires_a_folder() {
        let store = InMemoryStore::new();
        assert!(matches!(run(&store, &[]), Err(TagsmithError::Api(_))));
    }

    #[test]
    fn test_scan_marks_selected_entries() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("goblin")).unwrap();
        fs::write(temp.path().join("goblin/idle.png"), b"x").unwrap();
        fs::write(temp.path().join("goblin/walk.png"), b"x").unwrap();

        let mut store = InMemoryStore::new();
        set_folder(&mut store, temp.path()).unwrap();
        use_tag(&mut store, "monsters").unwrap();
        tag_files(&mut store, &["goblin/idle.png".to_string()]).unwrap();

        let result = run(&store, &[]).unwrap();
        assert_eq!(result.listed_entries.len(), 2);
        assert!(result.listed_entries[0].selected); // goblin/idle.png
        assert!(!result.listed_entries[1].selected); // goblin/walk.png
    }

    #[test]
    fn test_scan_without_active_tag_marks_nothing() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("a.png"), b"x").unwrap();

        let mut store = InMemoryStore::new();
        set_folder(&mut store, temp.path()).unwrap();

        let result = run(&store, &[]).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert!(!result.listed_entries[0].selected);
    }
}
