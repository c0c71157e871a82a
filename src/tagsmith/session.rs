//! Working session state.
//!
//! Between invocations the CLI needs to remember which tag is being worked
//! on and which folder candidate files come from. Both live in a
//! [`Session`] persisted by the store layer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagsmithError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The tag selection-mutating operations act on.
    #[serde(default)]
    pub active_tag: Option<String>,

    /// The folder files are drawn from.
    #[serde(default)]
    pub asset_root: Option<PathBuf>,
}

impl Session {
    /// The active tag, or [`TagsmithError::NoActiveTag`].
    ///
    /// Selection mutations are refused here, before any model operation
    /// runs; the model itself has no notion of an active tag.
    pub fn require_active_tag(&self) -> Result<&str> {
        self.active_tag
            .as_deref()
            .ok_or(TagsmithError::NoActiveTag)
    }

    /// The asset root, or an error directing the user to `folder`.
    pub fn require_asset_root(&self) -> Result<&std::path::Path> {
        self.asset_root.as_deref().ok_or_else(|| {
            TagsmithError::Api(
                "No asset folder selected. Choose one with 'tagsmith folder <path>'".to_string(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_active_tag_when_none() {
        let session = Session::default();
        assert!(matches!(
            session.require_active_tag(),
            Err(TagsmithError::NoActiveTag)
        ));
    }

    #[test]
    fn test_require_active_tag_when_set() {
        let session = Session {
            active_tag: Some("monsters".to_string()),
            asset_root: None,
        };
        assert_eq!(session.require_active_tag().unwrap(), "monsters");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let session = Session {
            active_tag: Some("props".to_string()),
            asset_root: Some(PathBuf::from("/assets/objects")),
        };
        let json = serde_json::to_string(&session).unwrap();
        let loaded: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_deserializes_from_empty_object() {
        let loaded: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded, Session::default());
    }
}
