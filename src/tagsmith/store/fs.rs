use std::fs;
use std::path::{Path, PathBuf};

use super::DocumentStore;
use crate::error::{Result, TagsmithError};
use crate::model::TagStore;
use crate::session::Session;

const DOCUMENT_FILENAME: &str = "tags.json";
const SESSION_FILENAME: &str = "session.json";

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(TagsmithError::Io)?;
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn load_store(&self) -> Result<TagStore> {
        let path = self.dir.join(DOCUMENT_FILENAME);
        if !path.exists() {
            return Ok(TagStore::new());
        }
        let content = fs::read_to_string(path).map_err(TagsmithError::Io)?;
        let store: TagStore =
            serde_json::from_str(&content).map_err(TagsmithError::Serialization)?;
        Ok(store)
    }

    fn save_store(&mut self, store: &TagStore) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(store).map_err(TagsmithError::Serialization)?;
        fs::write(self.dir.join(DOCUMENT_FILENAME), content).map_err(TagsmithError::Io)?;
        Ok(())
    }

    fn load_session(&self) -> Result<Session> {
        let path = self.dir.join(SESSION_FILENAME);
        if !path.exists() {
            return Ok(Session::default());
        }
        let content = fs::read_to_string(path).map_err(TagsmithError::Io)?;
        let session: Session =
            serde_json::from_str(&content).map_err(TagsmithError::Serialization)?;
        Ok(session)
    }

    fn save_session(&mut self, session: &Session) -> Result<()> {
        self.ensure_dir()?;
        let content =
            serde_json::to_string_pretty(session).map_err(TagsmithError::Serialization)?;
        fs::write(self.dir.join(SESSION_FILENAME), content).map_err(TagsmithError::Io)?;
        Ok(())
    }
}
