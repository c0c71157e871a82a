use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;

/// Rewrite every stored path under a new prefix.
pub fn run<S: DocumentStore>(store: &mut S, new_prefix: &str) -> Result<CmdResult> {
    let tag_store = store.load_store()?;
    let old_prefix = tag_store.prefix().to_string();
    store.save_store(&tag_store.change_file_prefix(new_prefix))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "File prefix changed from '{}' to '{}'",
        old_prefix, new_prefix
    )));
    Ok(result)
}
