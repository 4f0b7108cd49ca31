use super::{AnalyzerError, Entity, LinguisticAnalyzer, TaggedToken};

/// Stand-in analyzer used when no linguistic backend is available
///
/// Every call succeeds with an empty result, so components fall back to
/// their defaults and pattern-only paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnalyzer;

impl LinguisticAnalyzer for NoopAnalyzer {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn sentences(&self, _text: &str) -> Result<Vec<String>, AnalyzerError> {
        Ok(vec![])
    }

    fn tokens(&self, _text: &str) -> Result<Vec<TaggedToken>, AnalyzerError> {
        Ok(vec![])
    }

    fn entities(&self, _text: &str) -> Result<Vec<Entity>, AnalyzerError> {
        Ok(vec![])
    }
}
