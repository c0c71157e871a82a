use std::path::Path;

use crate::commands::helpers::normalized_tag_name;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TagsmithError};
use crate::store::DocumentStore;

/// Choose or create a tag and make it the active one.
pub fn use_tag<S: DocumentStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = normalized_tag_name(name)?;

    let tag_store = store.load_store()?;
    let created = !tag_store.tag_exists(name);
    if created {
        store.save_store(&tag_store.add_tag(name))?;
    }

    let mut session = store.load_session()?;
    session.active_tag = Some(name.to_string());
    store.save_session(&session)?;

    let mut result = CmdResult::default();
    if created {
        result.add_message(CmdMessage::success(format!(
            "Created tag '{}' and made it active",
            name
        )));
    } else {
        result.add_message(CmdMessage::success(format!("Active tag is now '{}'", name)));
    }
    Ok(result)
}

/// Choose the asset folder files are drawn from.
pub fn set_folder<S: DocumentStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    if !path.is_dir() {
        return Err(TagsmithError::Api(format!(
            "Not a directory: {}",
            path.display()
        )));
    }

    let mut session = store.load_session()?;
    session.asset_root = Some(path.to_path_buf());
    store.save_session(&session)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Asset folder is now {}",
        path.display()
    )));
    Ok(result)
}
