use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DocumentStore;

/// Render the working document exactly as export would write it.
pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let tag_store = store.load_store()?;
    Ok(CmdResult::default().with_rendered(tag_store.to_json()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::session::use_tag;
    use crate::commands::tagging::tag_files;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_preview_renders_export_text() {
        let mut store = InMemoryStore::new();
        use_tag(&mut store, "props").unwrap();
        tag_files(&mut store, &["crate.png".to_string()]).unwrap();

        let result = run(&store).unwrap();
        let text = result.rendered.unwrap();
        assert!(text.contains("textures/crate.png"));
        assert!(text.contains("\"sets\""));
    }

    #[test]
    fn test_preview_of_empty_store() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        let text = result.rendered.unwrap();
        assert!(text.contains("\"tags\""));
    }
}
