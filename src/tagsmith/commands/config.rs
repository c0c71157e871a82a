use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::TagsmithConfig;
use crate::error::{Result, TagsmithError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    Show,
    Get(String),
    Set(String, String),
}

const KEY_EXPORT_FILENAME: &str = "export-filename";
const KEY_SCAN_EXTENSIONS: &str = "scan-extensions";

/// Get or set configuration stored beside the working document.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TagsmithConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::Show => {
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                KEY_EXPORT_FILENAME, config.export_filename
            )));
            result.add_message(CmdMessage::info(format!(
                "{} = {}",
                KEY_SCAN_EXTENSIONS,
                config.scan_extensions.join(",")
            )));
        }
        ConfigAction::Get(key) => match key.as_str() {
            KEY_EXPORT_FILENAME => {
                result.add_message(CmdMessage::info(config.export_filename.clone()));
            }
            KEY_SCAN_EXTENSIONS => {
                result.add_message(CmdMessage::info(config.scan_extensions.join(",")));
            }
            other => {
                return Err(TagsmithError::Api(format!("Unknown config key: {}", other)));
            }
        },
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                KEY_EXPORT_FILENAME => {
                    config.export_filename = value.clone();
                }
                KEY_SCAN_EXTENSIONS => {
                    let extensions: Vec<&str> =
                        value.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
                    config.set_scan_extensions(&extensions);
                }
                other => {
                    return Err(TagsmithError::Api(format!("Unknown config key: {}", other)));
                }
            }
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("Set {} to {}", key, value)));
        }
    }

    Ok(result.with_config(config))
}
