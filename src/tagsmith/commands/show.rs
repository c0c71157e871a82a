use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

/// Show the selection for a named tag, or for the active tag when no name
/// is given. Paths are shown without the prefix, as the user typed them.
pub fn run<S: DocumentStore>(store: &S, tag: Option<&str>) -> Result<CmdResult> {
    let session = store.load_session()?;
    let tag = match tag {
        Some(name) => name,
        None => session.require_active_tag()?,
    };

    let tag_store = store.load_store()?;
    let mut result = CmdResult::default();

    if !tag_store.tag_exists(tag) {
        result.add_message(CmdMessage::warning(format!("No such tag: '{}'", tag)));
        return Ok(result);
    }

    let paths = tag_store.paths_for_tag_without_prefix(tag);
    if paths.is_empty() {
        result.add_message(CmdMessage::info(format!("No files selected for '{}'", tag)));
    }
    Ok(result.with_listed_paths(paths))
}
