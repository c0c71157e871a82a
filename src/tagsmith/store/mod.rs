//! # Storage Layer
//!
//! The [`DocumentStore`] trait abstracts where the working document and
//! session live, so the command layer stays decoupled from persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Working document in `tags.json` (full internal state, prefix included)
//!   - Session state in `session.json`
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Working document vs. export artifact
//!
//! The working document serializes the whole [`TagStore`], including the
//! prefix, so a changed prefix survives between invocations. The export
//! artifact is the stripped-down interchange form ([`TagStore::to_json`])
//! and is only ever written by the export command. Externally authored
//! files enter through [`TagStore::from_json`]'s repair pass, never through
//! the working-document loader.

use crate::error::Result;
use crate::model::TagStore;
use crate::session::Session;

pub mod fs;
pub mod memory;

/// Abstract interface for working-state storage.
pub trait DocumentStore {
    /// Load the working tag store; a missing document yields an empty store
    fn load_store(&self) -> Result<TagStore>;

    /// Persist the working tag store
    fn save_store(&mut self, store: &TagStore) -> Result<()>;

    /// Load the session, or defaults when absent
    fn load_session(&self) -> Result<Session>;

    /// Persist the session
    fn save_session(&mut self, session: &Session) -> Result<()>;
}
