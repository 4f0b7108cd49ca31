use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FieldChange, TrackedField};

/// Review state of a requirement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Draft,
    Reviewed,
    Approved,
    Rejected,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Draft => "Draft",
            Status::Reviewed => "Reviewed",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Status::Draft),
            "reviewed" => Ok(Status::Reviewed),
            "approved" => Ok(Status::Approved),
            "rejected" => Ok(Status::Rejected),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        f.write_str(name)
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// A requirement produced by the pipeline, before the store assigns its identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRequirement {
    /// Raw phrase matched in the transcript
    pub original_requirement: String,
    /// Synthesized "As a ..., I want to ... so that I can ..." sentence
    pub user_story: String,
    /// Given/When/Then statements derived from the story
    pub acceptance_criteria: Vec<String>,
}

/// Stored requirement with identity and review metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    /// Sequential identifier, `REQ-NNN`
    pub id: String,
    pub original_requirement: String,
    pub user_story: String,
    pub acceptance_criteria: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
}

impl RequirementRecord {
    /// Promote a new requirement to a record in its initial Draft/Medium state
    pub fn from_new(id: String, requirement: NewRequirement, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_requirement: requirement.original_requirement,
            user_story: requirement.user_story,
            acceptance_criteria: requirement.acceptance_criteria,
            created_at,
            status: Status::default(),
            priority: Priority::default(),
        }
    }

    /// Apply an update and report the tracked fields whose value changed
    ///
    /// Fields are compared in the order user_story, status, priority. A field
    /// set to its current value is left out of the result.
    pub fn apply(&mut self, update: RequirementUpdate) -> Vec<FieldChange> {
        let mut changes = Vec::new();

        if let Some(user_story) = update.user_story {
            if user_story != self.user_story {
                changes.push(FieldChange::new(
                    TrackedField::UserStory,
                    &self.user_story,
                    &user_story,
                ));
                self.user_story = user_story;
            }
        }

        if let Some(status) = update.status {
            if status != self.status {
                changes.push(FieldChange::new(TrackedField::Status, self.status, status));
                self.status = status;
            }
        }

        if let Some(priority) = update.priority {
            if priority != self.priority {
                changes.push(FieldChange::new(
                    TrackedField::Priority,
                    self.priority,
                    priority,
                ));
                self.priority = priority;
            }
        }

        changes
    }
}

/// Explicit field updates; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementUpdate {
    pub user_story: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}
