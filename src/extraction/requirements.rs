use std::sync::Arc;

use tracing::{debug, warn};

use crate::nlp::{AnalyzerError, LinguisticAnalyzer};

use super::{dedup_preserving_order, PatternLibrary};

/// Candidates shorter than this many characters are too weak a signal
pub const DEFAULT_MIN_REQUIREMENT_LEN: usize = 10;

/// Finds candidate requirements in free-form transcript text
///
/// Two passes feed the result:
/// 1. Pattern pass over the lowercased text, one candidate per captured phrase
/// 2. Linguistic pass: sentences mentioning both an action verb and an actor
///
/// The linguistic pass is best-effort. If the analyzer fails the error is
/// logged and only the pattern candidates are returned.
pub struct RequirementExtractor {
    analyzer: Arc<dyn LinguisticAnalyzer>,
    library: &'static PatternLibrary,
    min_length: usize,
}

impl RequirementExtractor {
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>) -> Self {
        Self {
            analyzer,
            library: PatternLibrary::standard(),
            min_length: DEFAULT_MIN_REQUIREMENT_LEN,
        }
    }

    /// Override the minimum candidate length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Extract unique requirement strings, in discovery order
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = text.to_lowercase();
        let mut candidates = self.pattern_candidates(&normalized);

        match self.sentence_candidates(text) {
            Ok(sentences) => {
                debug!(
                    "Linguistic pass ({}) found {} candidate sentences",
                    self.analyzer.name(),
                    sentences.len()
                );
                candidates.extend(sentences);
            }
            Err(e) => warn!("Linguistic extraction skipped: {}", e),
        }

        dedup_preserving_order(candidates)
    }

    fn pattern_candidates(&self, normalized: &str) -> Vec<String> {
        let mut candidates = Vec::new();

        for pattern in self.library.patterns() {
            for captures in pattern.captures_iter(normalized) {
                let Some(group) = captures.get(1) else {
                    continue;
                };
                let requirement = group.as_str().trim();
                if requirement.chars().count() >= self.min_length {
                    candidates.push(requirement.to_string());
                }
            }
        }

        candidates
    }

    fn sentence_candidates(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        let sentences = self.analyzer.sentences(text)?;

        Ok(sentences
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| self.library.mentions_action_verb(s) && self.library.mentions_actor(s))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{AnalyzerConfig, HeuristicAnalyzer, NoopAnalyzer};

    fn heuristic_extractor() -> RequirementExtractor {
        RequirementExtractor::new(Arc::new(HeuristicAnalyzer::default()))
    }

    #[test]
    fn test_extract_password_and_notification() {
        let extractor = heuristic_extractor();
        let requirements = extractor.extract(
            "We need to let users reset their password. The system should notify the admin team.",
        );

        assert!(requirements.contains(&"let users reset their password".to_string()));
        assert!(requirements.contains(&"notify the admin team".to_string()));
    }

    #[test]
    fn test_short_candidates_are_discarded() {
        let extractor = RequirementExtractor::new(Arc::new(NoopAnalyzer));
        let requirements = extractor.extract("We need to log in. It should export all invoices.");

        assert_eq!(requirements, vec!["export all invoices"]);
        assert!(requirements.iter().all(|r| r.chars().count() >= 10));
    }

    #[test]
    fn test_no_duplicates() {
        let extractor = heuristic_extractor();
        let requirements = extractor.extract(
            "We need to track every shipment. Again, we need to track every shipment.",
        );

        assert_eq!(
            requirements
                .iter()
                .filter(|r| r.as_str() == "track every shipment")
                .count(),
            1
        );
    }

    #[test]
    fn test_linguistic_pass_adds_sentences() {
        let extractor = heuristic_extractor();
        let requirements =
            extractor.extract("Managers approve expense claims every Friday. Lunch was great.");

        assert_eq!(
            requirements,
            vec!["Managers approve expense claims every Friday."]
        );
    }

    #[test]
    fn test_noop_analyzer_is_pattern_only() {
        let extractor = RequirementExtractor::new(Arc::new(NoopAnalyzer));
        let requirements =
            extractor.extract("Managers approve expense claims every Friday. Lunch was great.");

        assert!(requirements.is_empty());
    }

    #[test]
    fn test_analyzer_failure_falls_back_to_patterns() {
        let analyzer = HeuristicAnalyzer::new(AnalyzerConfig { max_length: 10 });
        let extractor = RequirementExtractor::new(Arc::new(analyzer));
        let requirements =
            extractor.extract("Users should be able to search orders by customer name.");

        assert_eq!(requirements, vec!["search orders by customer name"]);
    }
}
