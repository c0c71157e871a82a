//! # API Facade
//!
//! A thin facade over the command layer, and the single entry point for
//! all tagsmith operations regardless of the UI driving them.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It performs no I/O of its own beyond what
//! the commands do through the store, and no presentation work at all.
//!
//! `TagsmithApi<S: DocumentStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use std::path::{Path, PathBuf};

use crate::commands;
use crate::config::TagsmithConfig;
use crate::error::Result;
use crate::store::DocumentStore;

pub struct TagsmithApi<S: DocumentStore> {
    store: S,
    config_dir: PathBuf,
    config: TagsmithConfig,
}

impl<S: DocumentStore> TagsmithApi<S> {
    pub fn new(store: S, config_dir: PathBuf, config: TagsmithConfig) -> Self {
        Self {
            store,
            config_dir,
            config,
        }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        let dir = self.config_dir.clone();
        commands::init::run(&mut self.store, &dir)
    }

    pub fn import(&mut self, file: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, file)
    }

    pub fn use_tag(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::session::use_tag(&mut self.store, name)
    }

    pub fn set_folder(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::session::set_folder(&mut self.store, path)
    }

    pub fn list_tags(&self) -> Result<commands::CmdResult> {
        commands::tags::list(&self.store)
    }

    pub fn add_tag(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::tags::add(&mut self.store, name)
    }

    pub fn remove_tag(&mut self, name: &str, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::tags::remove(&mut self.store, name, skip_confirm)
    }

    pub fn select(&mut self, paths: &[String]) -> Result<commands::CmdResult> {
        commands::select::run(&mut self.store, paths)
    }

    pub fn tag_files(&mut self, paths: &[String]) -> Result<commands::CmdResult> {
        commands::tagging::tag_files(&mut self.store, paths)
    }

    pub fn untag_files(&mut self, paths: &[String]) -> Result<commands::CmdResult> {
        commands::tagging::untag_files(&mut self.store, paths)
    }

    pub fn show(&self, tag: Option<&str>) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, tag)
    }

    pub fn scan(&self) -> Result<commands::CmdResult> {
        commands::scan::run(&self.store, &self.config.scan_extensions)
    }

    pub fn change_prefix(&mut self, new_prefix: &str) -> Result<commands::CmdResult> {
        commands::prefix::run(&mut self.store, new_prefix)
    }

    pub fn preview(&self) -> Result<commands::CmdResult> {
        commands::preview::run(&self.store)
    }

    pub fn export(&self, output: Option<PathBuf>) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, output, &self.config)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ScanEntry, TagSummary};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> TagsmithApi<InMemoryStore> {
        TagsmithApi::new(
            InMemoryStore::new(),
            PathBuf::from("/tmp/unused"),
            TagsmithConfig::default(),
        )
    }

    #[test]
    fn test_full_selection_workflow() {
        let mut api = api();
        api.use_tag("monsters").unwrap();
        api.tag_files(&["goblin/idle.png".to_string()]).unwrap();
        api.tag_files(&["goblin/walk.png".to_string()]).unwrap();
        api.untag_files(&["goblin/idle.png".to_string()]).unwrap();

        let result = api.show(None).unwrap();
        assert_eq!(result.listed_paths, vec!["goblin/walk.png"]);
    }

    #[test]
    fn test_select_replaces_whole_selection() {
        let mut api = api();
        api.use_tag("monsters").unwrap();
        api.select(&["goblin/idle.png".to_string()]).unwrap();
        api.select(&["goblin/walk.png".to_string()]).unwrap();

        let result = api.show(None).unwrap();
        assert_eq!(result.listed_paths, vec!["goblin/walk.png"]);
    }

    #[test]
    fn test_preview_reflects_changes() {
        let mut api = api();
        api.use_tag("props").unwrap();
        api.tag_files(&["crate.png".to_string()]).unwrap();

        let text = api.preview().unwrap().rendered.unwrap();
        assert!(text.contains("textures/crate.png"));
    }
}
