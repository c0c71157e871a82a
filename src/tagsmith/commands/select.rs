use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

/// Replace the active tag's selection with exactly the given paths.
///
/// Paths previously selected but not re-supplied are dropped; this is the
/// reconciliation step with the currently visible folder contents.
pub fn run<S: DocumentStore>(store: &mut S, paths: &[String]) -> Result<CmdResult> {
    let session = store.load_session()?;
    let tag = session.require_active_tag()?;

    let tag_store = store.load_store()?;
    let next = tag_store.set_files_for_tag(tag, paths, false);
    let count = next.paths_for_tag(tag).len();
    store.save_store(&next)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Selected {} file(s) for '{}'",
        count, tag
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::session::use_tag;
    use crate::error::TagsmithError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut store = InMemoryStore::new();
        use_tag(&mut store, "monsters").unwrap();

        run(&mut store, &["goblin/idle.png".to_string()]).unwrap();
        run(&mut store, &["goblin/walk.png".to_string()]).unwrap();

        let tag_store = store.load_store().unwrap();
        assert_eq!(
            tag_store.paths_for_tag("monsters"),
            &["textures/goblin/walk.png"]
        );
    }

    #[test]
    fn test_select_dedupes_input() {
        let mut store = InMemoryStore::new();
        use_tag(&mut store, "props").unwrap();

        let result = run(
            &mut store,
            &["crate.png".to_string(), "crate.png".to_string()],
        )
        .unwrap();

        assert!(result.messages[0].content.contains("Selected 1 file(s)"));
    }

    #[test]
    fn test_select_without_active_tag_is_refused() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &["crate.png".to_string()]);
        assert!(matches!(result, Err(TagsmithError::NoActiveTag)));
        // The working document was never touched
        assert!(store.load_store().unwrap().is_empty());
    }
}
