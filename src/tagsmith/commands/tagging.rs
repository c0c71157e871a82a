//! Additive and subtractive selection changes for the active tag.
//!
//! Unlike `select`, these never drop paths that are not mentioned.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

/// Add paths to the active tag's selection.
pub fn tag_files<S: DocumentStore>(store: &mut S, paths: &[String]) -> Result<CmdResult> {
    let session = store.load_session()?;
    let tag = session.require_active_tag()?;

    let tag_store = store.load_store()?;
    let before = tag_store.paths_for_tag(tag).len();
    let next = tag_store.add_files_to_tag(tag, paths);
    let added = next.paths_for_tag(tag).len() - before;
    store.save_store(&next)?;

    let mut result = CmdResult::default();
    if added > 0 {
        result.add_message(CmdMessage::success(format!(
            "Tagged {} file(s) with '{}'",
            added, tag
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "All given files already tagged with '{}'",
            tag
        )));
    }
    Ok(result)
}

/// Remove paths from the active tag's selection.
pub fn untag_files<S: DocumentStore>(store: &mut S, paths: &[String]) -> Result<CmdResult> {
    let session = store.load_session()?;
    let tag = session.require_active_tag()?;

    let tag_store = store.load_store()?;
    let before = tag_store.paths_for_tag(tag).len();
    let next = tag_store.remove_files_from_tag(tag, paths);
    let removed = before - next.paths_for_tag(tag).len();
    store.save_store(&next)?;

    let mut result = CmdResult::default();
    if removed > 0 {
        result.add_message(CmdMessage::success(format!(
            "Untagged {} file(s) from '{}'",
            removed, tag
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "None of the given files were tagged with '{}'",
            tag
        )));
    }
    Ok(result)
}
