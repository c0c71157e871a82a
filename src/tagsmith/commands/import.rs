use std::fs;
use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TagsmithError};
use crate::model::TagStore;
use crate::store::DocumentStore;

/// Load a previously exported tag file as the working document.
///
/// The file goes through the repair pass (prefix normalization, sorting,
/// deduplication), replacing whatever working state existed, and the first
/// tag becomes the active one. Unparseable input fails the whole command
/// and the previous working state stays intact.
pub fn run<S: DocumentStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(TagsmithError::Io)?;
    let tag_store = TagStore::from_json(&content)?;

    store.save_store(&tag_store)?;

    let mut session = store.load_session()?;
    session.active_tag = tag_store.tag_list().into_iter().next();
    store.save_session(&session)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} tag(s) from {}",
        tag_store.tag_list().len(),
        path.display()
    )));
    if let Some(tag) = &session.active_tag {
        result.add_message(CmdMessage::info(format!("Active tag is now '{}'", tag)));
    }
    Ok(result)
}
