use crate::config::TagsmithConfig;
use crate::scan::FolderEntry;

pub mod config;
pub mod export;
pub mod helpers;
pub mod import;
pub mod init;
pub mod prefix;
pub mod preview;
pub mod scan;
pub mod select;
pub mod session;
pub mod show;
pub mod tagging;
pub mod tags;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row in the tag listing.
#[derive(Debug, Clone)]
pub struct TagSummary {
    pub name: String,
    pub path_count: usize,
    pub active: bool,
}

/// One row in the scan listing: a folder entry plus whether it is already
/// part of the active tag's selection.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    pub entry: FolderEntry,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_tags: Vec<TagSummary>,
    pub listed_paths: Vec<String>,
    pub listed_entries: Vec<ScanEntry>,
    pub rendered: Option<String>,
    pub config: Option<TagsmithConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_tags(mut self, tags: Vec<TagSummary>) -> Self {
        self.listed_tags = tags;
        self
    }

    pub fn with_listed_paths(mut self, paths: Vec<String>) -> Self {
        self.listed_paths = paths;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<ScanEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_rendered(mut self, rendered: String) -> Self {
        self.rendered = Some(rendered);
        self
    }

    pub fn with_config(mut self, config: TagsmithConfig) -> Self {
        self.config = Some(config);
        self
    }
}
