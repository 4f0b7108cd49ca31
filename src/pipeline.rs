use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::error::{IrmsError, IrmsResult};
use crate::extraction::{
    CriteriaGenerator, RequirementExtractor, StakeholderDetector, StorySynthesizer,
    DEFAULT_MIN_REQUIREMENT_LEN,
};
use crate::models::{NewRequirement, RequirementRecord};
use crate::nlp::LinguisticAnalyzer;
use crate::store::RequirementStore;

/// Hint returned when a transcript yields no requirements
pub const NO_REQUIREMENTS_MESSAGE: &str = "No requirements found. Try using phrases like \"we need to\", \"the system should\", \"users must be able to\"";

/// Configuration for transcript analysis
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of extracted requirements promoted to records per transcript
    pub max_requirements: usize,
    /// Minimum length of a pattern-matched requirement
    pub min_requirement_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_requirements: 5,
            min_requirement_len: DEFAULT_MIN_REQUIREMENT_LEN,
        }
    }
}

/// Result of analyzing one transcript
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    /// Records created in the store for this transcript
    pub requirements: Vec<RequirementRecord>,
    pub stakeholders: Vec<String>,
    /// Number of requirements extracted before the per-transcript limit
    pub total_found: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wires the extraction components together and records results in a store
///
/// The components themselves are stateless; all state lives in the store
/// passed to [`RequirementsEngine::analyze`].
pub struct RequirementsEngine {
    extractor: RequirementExtractor,
    synthesizer: StorySynthesizer,
    criteria: CriteriaGenerator,
    stakeholders: StakeholderDetector,
    config: EngineConfig,
}

impl RequirementsEngine {
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>, config: EngineConfig) -> Self {
        info!("Using {} linguistic analyzer", analyzer.name());
        Self {
            extractor: RequirementExtractor::new(Arc::clone(&analyzer))
                .with_min_length(config.min_requirement_len),
            synthesizer: StorySynthesizer::new(Arc::clone(&analyzer)),
            criteria: CriteriaGenerator::new(),
            stakeholders: StakeholderDetector::new(analyzer),
            config,
        }
    }

    /// Build the story and criteria for one extracted requirement
    pub fn promote(&self, requirement: &str) -> NewRequirement {
        let user_story = self.synthesizer.synthesize(requirement);
        let acceptance_criteria = self.criteria.generate(&user_story);
        NewRequirement {
            original_requirement: requirement.to_string(),
            user_story,
            acceptance_criteria,
        }
    }

    /// Analyze a transcript and store the resulting requirement records
    ///
    /// Fails only when the transcript is empty. A transcript with no
    /// recognizable requirement returns an empty outcome with a hint message
    /// and skips stakeholder detection.
    pub fn analyze(
        &self,
        transcript: &str,
        store: &mut dyn RequirementStore,
    ) -> IrmsResult<AnalysisOutcome> {
        if transcript.trim().is_empty() {
            return Err(IrmsError::InvalidInput);
        }

        let extracted = self.extractor.extract(transcript);
        info!("Extracted {} candidate requirements", extracted.len());

        if extracted.is_empty() {
            return Ok(AnalysisOutcome {
                requirements: vec![],
                stakeholders: vec![],
                total_found: 0,
                message: Some(NO_REQUIREMENTS_MESSAGE.to_string()),
            });
        }

        let requirements: Vec<RequirementRecord> = extracted
            .iter()
            .take(self.config.max_requirements)
            .map(|req| store.insert(self.promote(req)))
            .collect();

        let stakeholders = self.stakeholders.detect(transcript);
        info!(
            "Stored {} requirements, found {} stakeholders",
            requirements.len(),
            stakeholders.len()
        );

        Ok(AnalysisOutcome {
            requirements,
            stakeholders,
            total_found: extracted.len(),
            message: None,
        })
    }
}
