use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ProjectInfo;
use crate::store::InMemoryStore;

/// Read a plain-text transcript
pub fn read_transcript(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read transcript: {:?}", path))
}

/// Parse project details for document generation from a JSON file
pub fn read_project_info(path: &Path) -> Result<ProjectInfo> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project info: {:?}", path))?;
    serde_json::from_str(&content).context("Failed to parse project info JSON")
}

/// Load a store snapshot, or an empty store if the file does not exist yet
pub fn load_store(path: &Path) -> Result<InMemoryStore> {
    if !path.exists() {
        return Ok(InMemoryStore::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read store: {:?}", path))?;
    serde_json::from_str(&content).context("Failed to parse store JSON")
}
