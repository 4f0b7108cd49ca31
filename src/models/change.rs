use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Requirement fields whose changes are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedField {
    UserStory,
    Status,
    Priority,
}

/// Old and new value of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: TrackedField,
    pub old_value: String,
    pub new_value: String,
}

impl FieldChange {
    pub fn new(field: TrackedField, old_value: impl fmt::Display, new_value: impl fmt::Display) -> Self {
        Self {
            field,
            old_value: old_value.to_string(),
            new_value: new_value.to_string(),
        }
    }
}

/// Append-only audit entry for one update of a requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub requirement_id: String,
    pub timestamp: DateTime<Utc>,
    /// Never empty: updates that change nothing produce no record
    pub changes: Vec<FieldChange>,
}
