pub mod error;
pub mod extraction;
pub mod io;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod render;
pub mod store;

pub use error::{IrmsError, IrmsResult};
pub use extraction::{
    ActionCategory, CriteriaGenerator, PatternLibrary, RequirementExtractor, StakeholderDetector,
    StorySynthesizer, UserStory,
};
pub use io::{load_store, read_project_info, read_transcript, save_store, write_brd, write_json};
pub use models::{
    ChangeRecord, FieldChange, NewRequirement, Priority, ProjectInfo, RequirementRecord,
    RequirementUpdate, Status, TrackedField,
};
pub use nlp::{AnalyzerConfig, HeuristicAnalyzer, LinguisticAnalyzer, NoopAnalyzer};
pub use pipeline::{AnalysisOutcome, EngineConfig, RequirementsEngine};
pub use render::{render_communication, Audience, BrdDocument, BrdGenerator};
pub use store::{InMemoryStore, RequirementStore};
