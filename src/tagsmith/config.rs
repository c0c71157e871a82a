use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagsmithError};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILENAME: &str = "default.dungeondraft_tags";

/// Configuration for tagsmith, stored in .tagsmith/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagsmithConfig {
    /// File name the export artifact is written to by default
    #[serde(default = "default_export_filename")]
    pub export_filename: String,

    /// Extensions scan includes (e.g. ".png", ".webp"); empty means all files
    #[serde(default = "default_scan_extensions")]
    pub scan_extensions: Vec<String>,
}

fn default_export_filename() -> String {
    DEFAULT_EXPORT_FILENAME.to_string()
}

fn default_scan_extensions() -> Vec<String> {
    vec![
        ".png".to_string(),
        ".webp".to_string(),
        ".jpg".to_string(),
        ".jpeg".to_string(),
        ".bmp".to_string(),
        ".svg".to_string(),
    ]
}

impl Default for TagsmithConfig {
    fn default() -> Self {
        Self {
            export_filename: default_export_filename(),
            scan_extensions: default_scan_extensions(),
        }
    }
}

impl TagsmithConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TagsmithError::Io)?;
        let config: TagsmithConfig =
            serde_json::from_str(&content).map_err(TagsmithError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TagsmithError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TagsmithError::Serialization)?;
        fs::write(config_path, content).map_err(TagsmithError::Io)?;
        Ok(())
    }

    /// Set the extensions scan includes (normalizes each to start with a dot)
    pub fn set_scan_extensions(&mut self, extensions: &[&str]) {
        self.scan_extensions = extensions
            .iter()
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
    }
}
