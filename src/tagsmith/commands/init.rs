use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::TagsmithConfig;
use crate::error::Result;
use crate::model::TagStore;
use crate::store::DocumentStore;

/// Create the workspace directory with a default config and an empty
/// working document. Safe to run in an existing workspace.
pub fn run<S: DocumentStore>(store: &mut S, config_dir: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if config_dir.join("config.json").exists() {
        result.add_message(CmdMessage::info("Workspace already initialized."));
        return Ok(result);
    }

    TagsmithConfig::default().save(config_dir)?;
    let existing = store.load_store().unwrap_or_else(|_| TagStore::new());
    store.save_store(&existing)?;

    result.add_message(CmdMessage::success(format!(
        "Initialized tag workspace in {}",
        config_dir.display()
    )));
    Ok(result)
}
