use super::DocumentStore;
use crate::error::Result;
use crate::model::TagStore;
use crate::session::Session;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    store: Option<TagStore>,
    session: Session,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn load_store(&self) -> Result<TagStore> {
        Ok(self.store.clone().unwrap_or_default())
    }

    fn save_store(&mut self, store: &TagStore) -> Result<()> {
        self.store = Some(store.clone());
        Ok(())
    }

    fn load_session(&self) -> Result<Session> {
        Ok(self.session.clone())
    }

    fn save_session(&mut self, session: &Session) -> Result<()> {
        self.session = session.clone();
        Ok(())
    }
}
