use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::{CmdMessage, CmdResult};
use crate::config::TagsmithConfig;
use crate::error::{Result, TagsmithError};
use crate::store::DocumentStore;

/// Write the export artifact.
///
/// The artifact is the interchange form of the working document; the
/// output path defaults to the configured export file name in the current
/// directory. Dungeondraft looks the file up by its exact name, so the
/// default is kept intact rather than derived from anything.
pub fn run<S: DocumentStore>(
    store: &S,
    output: Option<PathBuf>,
    config: &TagsmithConfig,
) -> Result<CmdResult> {
    let tag_store = store.load_store()?;

    let mut result = CmdResult::default();
    if tag_store.is_empty() {
        result.add_message(CmdMessage::info("No tags to export."));
        return Ok(result);
    }

    let out_path = output.unwrap_or_else(|| PathBuf::from(&config.export_filename));
    write_artifact(&out_path, &tag_store.to_json()?)?;

    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        out_path.display()
    )));
    Ok(result)
}

fn write_artifact(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(TagsmithError::Io)
}
