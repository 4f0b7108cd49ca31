use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IrmsError, IrmsResult};
use crate::models::{ChangeRecord, NewRequirement, RequirementRecord, RequirementUpdate};

use super::RequirementStore;

/// In-process requirement store
///
/// Serializable so callers can snapshot it to disk between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryStore {
    /// Number of ids handed out so far; ids are never reused
    next_sequence: u64,
    requirements: Vec<RequirementRecord>,
    changes: Vec<ChangeRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records matching the given ids, in store order
    pub fn select(&self, ids: &[String]) -> Vec<RequirementRecord> {
        self.requirements
            .iter()
            .filter(|r| ids.contains(&r.id))
            .cloned()
            .collect()
    }

    fn next_id(&mut self) -> String {
        self.next_sequence += 1;
        format!("REQ-{:03}", self.next_sequence)
    }
}

impl RequirementStore for InMemoryStore {
    fn insert(&mut self, requirement: NewRequirement) -> RequirementRecord {
        let id = self.next_id();
        let record = RequirementRecord::from_new(id, requirement, Utc::now());
        debug!("Stored requirement {}", record.id);
        self.requirements.push(record.clone());
        record
    }

    fn update(&mut self, id: &str, update: RequirementUpdate) -> IrmsResult<RequirementRecord> {
        let record = self
            .requirements
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| IrmsError::RequirementNotFound(id.to_string()))?;

        let changes = record.apply(update);
        let updated = record.clone();

        if !changes.is_empty() {
            debug!("Requirement {}: {} field(s) changed", id, changes.len());
            self.changes.push(ChangeRecord {
                requirement_id: id.to_string(),
                timestamp: Utc::now(),
                changes,
            });
        }

        Ok(updated)
    }

    fn list(&self) -> Vec<RequirementRecord> {
        self.requirements.clone()
    }

    fn find(&self, id: &str) -> Option<RequirementRecord> {
        self.requirements.iter().find(|r| r.id == id).cloned()
    }

    fn changes(&self, requirement_id: Option<&str>) -> Vec<ChangeRecord> {
        self.changes
            .iter()
            .filter(|c| requirement_id.is_none_or(|id| c.requirement_id == id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Status, TrackedField};

    fn new_requirement(text: &str) -> NewRequirement {
        NewRequirement {
            original_requirement: text.to_string(),
            user_story: format!("As a user, I want to {} so that I can improve the process", text),
            acceptance_criteria: vec![],
        }
    }

    #[test]
    fn test_sequential_ids() {
        let mut store = InMemoryStore::new();
        let first = store.insert(new_requirement("export invoices"));
        let second = store.insert(new_requirement("import invoices"));

        assert_eq!(first.id, "REQ-001");
        assert_eq!(second.id, "REQ-002");
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.find("REQ-002").unwrap().original_requirement, "import invoices");
    }

    #[test]
    fn test_update_to_same_status_logs_nothing() {
        let mut store = InMemoryStore::new();
        let record = store.insert(new_requirement("export invoices"));

        store
            .update(
                &record.id,
                RequirementUpdate {
                    status: Some(Status::Draft),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(store.changes(None).is_empty());
    }

    #[test]
    fn test_update_to_new_status_logs_one_change() {
        let mut store = InMemoryStore::new();
        let record = store.insert(new_requirement("export invoices"));

        let updated = store
            .update(
                &record.id,
                RequirementUpdate {
                    status: Some(Status::Reviewed),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.status, Status::Reviewed);
        let changes = store.changes(Some("REQ-001"));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].changes.len(), 1);
        assert_eq!(changes[0].changes[0].field, TrackedField::Status);
    }

    #[test]
    fn test_changes_filtered_by_requirement() {
        let mut store = InMemoryStore::new();
        store.insert(new_requirement("export invoices"));
        store.insert(new_requirement("import invoices"));

        let priority = RequirementUpdate {
            priority: Some(Priority::High),
            ..Default::default()
        };
        store.update("REQ-001", priority.clone()).unwrap();
        store.update("REQ-002", priority).unwrap();

        assert_eq!(store.changes(None).len(), 2);
        assert_eq!(store.changes(Some("REQ-002")).len(), 1);
        assert!(store.changes(Some("REQ-009")).is_empty());
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = InMemoryStore::new();
        let result = store.update("REQ-404", RequirementUpdate::default());

        assert!(matches!(result, Err(IrmsError::RequirementNotFound(id)) if id == "REQ-404"));
    }

    #[test]
    fn test_snapshot_keeps_sequence() {
        let mut store = InMemoryStore::new();
        store.insert(new_requirement("export invoices"));

        let json = serde_json::to_string(&store).unwrap();
        let mut restored: InMemoryStore = serde_json::from_str(&json).unwrap();
        let next = restored.insert(new_requirement("import invoices"));

        assert_eq!(next.id, "REQ-002");
    }

    #[test]
    fn test_ids_continue_past_u32_range() {
        let mut store = InMemoryStore {
            next_sequence: u64::from(u32::MAX),
            ..Default::default()
        };
        let next = store.insert(new_requirement("export invoices"));

        assert_eq!(next.id, "REQ-4294967296");
    }

    #[test]
    fn test_select_preserves_store_order() {
        let mut store = InMemoryStore::new();
        store.insert(new_requirement("export invoices"));
        store.insert(new_requirement("import invoices"));

        let selected = store.select(&["REQ-002".to_string(), "REQ-001".to_string()]);

        assert_eq!(selected[0].id, "REQ-001");
        assert_eq!(selected[1].id, "REQ-002");
    }
}
