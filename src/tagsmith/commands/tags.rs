use std::io::{self, Write};

use crate::commands::helpers::normalized_tag_name;
use crate::commands::{CmdMessage, CmdResult, TagSummary};
use crate::error::{Result, TagsmithError};
use crate::store::DocumentStore;

/// List all tags with their selection sizes, marking the active one.
pub fn list<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let tag_store = store.load_store()?;
    let session = store.load_session()?;

    let summaries: Vec<TagSummary> = tag_store
        .tag_list()
        .into_iter()
        .map(|name| TagSummary {
            path_count: tag_store.paths_for_tag(&name).len(),
            active: session.active_tag.as_deref() == Some(name.as_str()),
            name,
        })
        .collect();

    let mut result = CmdResult::default().with_listed_tags(summaries);
    if result.listed_tags.is_empty() {
        result.add_message(CmdMessage::info("No tags yet."));
    }
    Ok(result)
}

/// Add a tag without making it active.
pub fn add<S: DocumentStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = normalized_tag_name(name)?;
    let tag_store = store.load_store()?;

    let mut result = CmdResult::default();
    if tag_store.tag_exists(name) {
        result.add_message(CmdMessage::info(format!("Tag '{}' already exists", name)));
        return Ok(result);
    }

    store.save_store(&tag_store.add_tag(name))?;
    result.add_message(CmdMessage::success(format!("Added tag '{}'", name)));
    Ok(result)
}

/// Remove a tag and its entire selection. There is no undo, so the user is
/// asked to confirm unless `skip_confirm` is set.
pub fn remove<S: DocumentStore>(store: &mut S, name: &str, skip_confirm: bool) -> Result<CmdResult> {
    let name = normalized_tag_name(name)?;
    let tag_store = store.load_store()?;

    let mut result = CmdResult::default();
    if !tag_store.tag_exists(name) {
        result.add_message(CmdMessage::warning(format!("No such tag: '{}'", name)));
        return Ok(result);
    }

    let path_count = tag_store.paths_for_tag(name).len();
    if !skip_confirm {
        println!(
            "This will permanently remove tag '{}' and its {} selected file(s).",
            name, path_count
        );
        print!("[Y] To remove: ");
        io::stdout().flush().map_err(TagsmithError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(TagsmithError::Io)?;

        if input.trim() != "Y" {
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    store.save_store(&tag_store.remove_tag(name))?;

    // Drop the active tag if it was the one removed
    let mut session = store.load_session()?;
    if session.active_tag.as_deref() == Some(name) {
        session.active_tag = None;
        store.save_session(&session)?;
    }

    result.add_message(CmdMessage::success(format!("Removed tag '{}'", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_add_then_list() {
        let mut store = InMemoryStore::new();
        add(&mut store, "Zed").unwrap();
        add(&mut store, "Alpha").unwrap();

        let result = list(&store).unwrap();
        let names: Vec<&str> = result
            .listed_tags
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Zed"]);
    }

    #[test]
    fn test_add_trims_name() {
        let mut store = InMemoryStore::new();
        add(&mut store, "  monsters  ").unwrap();
        assert!(store.load_store().unwrap().tag_exists("monsters"));
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut store = InMemoryStore::new();
        assert!(add(&mut store, "   ").is_err());
    }

    #[test]
    fn test_add_existing_reports_info() {
        let mut store = InMemoryStore::new();
        add(&mut store, "monsters").unwrap();
        let result = add(&mut store, "monsters").unwrap();
        assert!(result.messages[0].content.contains("already exists"));
    }

    #[test]
    fn test_list_marks_active_tag() {
        let mut store = InMemoryStore::new();
        add(&mut store, "a").unwrap();
        add(&mut store, "b").unwrap();
        store
            .save_session(&Session {
                active_tag: Some("b".to_string()),
                asset_root: None,
            })
            .unwrap();

        let result = list(&store).unwrap();
        assert!(!result.listed_tags[0].active);
        assert!(result.listed_tags[1].active);
    }

    #[test]
    fn test_remove_deletes_tag() {
        let mut store = InMemoryStore::new();
        add(&mut store, "monsters").unwrap();
        remove(&mut store, "monsters", true).unwrap();
        assert!(!store.load_store().unwrap().tag_exists("monsters"));
    }

    #[test]
    fn test_remove_missing_tag_warns() {
        let mut store = InMemoryStore::new();
        let result = remove(&mut store, "ghost", true).unwrap();
        assert!(result.messages[0].content.contains("No such tag"));
    }

    #[test]
    fn test_remove_clears_active_tag() {
        let mut store = InMemoryStore::new();
        add(&mut store, "monsters").unwrap();
        store
            .save_session(&Session {
                active_tag: Some("monsters".to_string()),
                asset_root: None,
            })
            .unwrap();

        remove(&mut store, "monsters", true).unwrap();
        assert_eq!(store.load_session().unwrap().active_tag, None);
    }
}
