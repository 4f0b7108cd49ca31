pub mod memory;

pub use memory::*;

use crate::error::IrmsResult;
use crate::models::{ChangeRecord, NewRequirement, RequirementRecord, RequirementUpdate};

/// Storage for requirement records and their audit trail
///
/// The store owns identity and timestamps: `insert` assigns the next
/// sequential id and `update` appends a change record whenever a tracked
/// field actually changes.
pub trait RequirementStore {
    /// Store a new requirement and return the created record
    fn insert(&mut self, requirement: NewRequirement) -> RequirementRecord;

    /// Apply field updates to an existing record
    fn update(&mut self, id: &str, update: RequirementUpdate) -> IrmsResult<RequirementRecord>;

    /// All records in insertion order
    fn list(&self) -> Vec<RequirementRecord>;

    fn find(&self, id: &str) -> Option<RequirementRecord>;

    /// Change log, optionally restricted to one requirement
    fn changes(&self, requirement_id: Option<&str>) -> Vec<ChangeRecord>;
}
