use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::warn;

use crate::nlp::{EntityLabel, LinguisticAnalyzer};

use super::dedup_preserving_order;

/// Role mentions, optionally with one qualifying word in front ("project manager")
const ROLE_PATTERNS: &[&str] = &[
    r"(\w+\s+)?manager",
    r"(\w+\s+)?director",
    r"(\w+\s+)?lead",
    r"(\w+\s+)?team",
    r"product owner",
    r"business analyst",
    r"developer",
    r"tester",
];

static ROLE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ROLE_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("hardcoded regex pattern is valid"))
        .collect()
});

/// Finds people and roles mentioned in a transcript
///
/// Person names come from the analyzer verbatim. Role mentions are matched
/// on the original text and title-cased. The two sources are unioned with
/// exact-string deduplication only, so a name and a role that refer to the
/// same individual both appear.
pub struct StakeholderDetector {
    analyzer: Arc<dyn LinguisticAnalyzer>,
}

impl StakeholderDetector {
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Unique stakeholder labels, people first, then roles in pattern order
    pub fn detect(&self, text: &str) -> Vec<String> {
        let mut stakeholders = Vec::new();

        match self.analyzer.entities(text) {
            Ok(entities) => stakeholders.extend(
                entities
                    .into_iter()
                    .filter(|e| e.label == EntityLabel::Person)
                    .map(|e| e.text),
            ),
            Err(e) => warn!("Stakeholder entity recognition skipped: {}", e),
        }

        for regex in ROLE_REGEXES.iter() {
            stakeholders.extend(regex.find_iter(text).map(|m| title_case(m.as_str().trim())));
        }

        dedup_preserving_order(stakeholders)
    }
}

/// Uppercase the first letter of every word and lowercase the rest
///
/// A "word" starts after any character that is not a cased letter, so
/// "qa lead" becomes "Qa Lead" and "o'neil" becomes "O'Neil".
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_cased = false;

    for c in text.chars() {
        if prev_cased {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        prev_cased = c.is_uppercase() || c.is_lowercase();
    }

    result
}
