use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::render::BrdDocument;
use crate::store::InMemoryStore;

/// Write any serializable value as pretty JSON
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
    Ok(())
}

/// Persist a store snapshot for the next run
pub fn save_store(store: &InMemoryStore, path: &Path) -> Result<()> {
    write_json(store, path)
}

/// Write a generated document as Markdown
pub fn write_brd(document: &BrdDocument, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    write!(file, "{}", document.content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_store;
    use crate::models::NewRequirement;
    use crate::store::RequirementStore;

    #[test]
    fn test_store_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = InMemoryStore::new();
        store.insert(NewRequirement {
            original_requirement: "export invoices weekly".to_string(),
            user_story: "As a user, I want to export invoices weekly so that I can improve the process".to_string(),
            acceptance_criteria: vec!["GIVEN the export feature is available".to_string()],
        });
        save_store(&store, &path).unwrap();

        let mut loaded = load_store(&path).unwrap();
        assert_eq!(loaded.list(), store.list());

        let next = loaded.insert(NewRequirement {
            original_requirement: "import invoices".to_string(),
            user_story: String::new(),
            acceptance_criteria: vec![],
        });
        assert_eq!(next.id, "REQ-002");
    }
}
