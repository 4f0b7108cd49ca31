use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::warn;

use crate::nlp::{LinguisticAnalyzer, PartOfSpeech, TaggedToken};

use super::PatternLibrary;

pub const DEFAULT_ACTOR: &str = "user";
pub const DEFAULT_BENEFIT: &str = "improve the process";

/// Verb phrases this short are not worth replacing the full requirement with
const MIN_ACTION_PHRASE_LEN: usize = 5;

/// Benefit clauses, tried in order against the original requirement text
static BENEFIT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)to\s+(.+)", r"(?i)so that\s+(.+)", r"(?i)in order to\s+(.+)"]
        .iter()
        .map(|p| Regex::new(p).expect("hardcoded regex pattern is valid"))
        .collect()
});

/// The three parts of a canonical user story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStory {
    pub actor: String,
    pub action: String,
    pub benefit: String,
}

impl fmt::Display for UserStory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "As a {}, I want to {} so that I can {}",
            self.actor, self.action, self.benefit
        )
    }
}

/// Turns a raw requirement phrase into a user story
pub struct StorySynthesizer {
    analyzer: Arc<dyn LinguisticAnalyzer>,
    library: &'static PatternLibrary,
}

impl StorySynthesizer {
    pub fn new(analyzer: Arc<dyn LinguisticAnalyzer>) -> Self {
        Self {
            analyzer,
            library: PatternLibrary::standard(),
        }
    }

    /// Render the requirement as "As a {actor}, I want to {action} so that I can {benefit}"
    pub fn synthesize(&self, requirement: &str) -> String {
        self.compose(requirement).to_string()
    }

    /// Build the story parts, falling back to defaults for anything not detected
    pub fn compose(&self, requirement: &str) -> UserStory {
        let mut story = UserStory {
            actor: DEFAULT_ACTOR.to_string(),
            action: requirement.to_string(),
            benefit: DEFAULT_BENEFIT.to_string(),
        };

        match self.analyzer.tokens(requirement) {
            Ok(tokens) => {
                if let Some(actor) = self.find_actor(&tokens) {
                    story.actor = actor;
                }
                if let Some(action) = find_action(&tokens) {
                    story.action = action;
                }
            }
            Err(e) => warn!("User story parsing skipped: {}", e),
        }

        if let Some(benefit) = find_benefit(requirement) {
            story.benefit = benefit;
        }

        story
    }

    fn find_actor(&self, tokens: &[TaggedToken]) -> Option<String> {
        tokens
            .iter()
            .find(|t| self.library.is_actor(&t.text))
            .map(|t| t.text.to_lowercase())
    }
}

/// First verb whose phrase (the verb and its dependents) is long enough
fn find_action(tokens: &[TaggedToken]) -> Option<String> {
    tokens
        .iter()
        .filter(|t| t.pos == PartOfSpeech::Verb)
        .filter_map(|verb| {
            let phrase = tokens
                .get(verb.subtree.clone())?
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            (phrase.chars().count() > MIN_ACTION_PHRASE_LEN).then_some(phrase)
        })
        .next()
}

fn find_benefit(requirement: &str) -> Option<String> {
    BENEFIT_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(requirement)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{AnalyzerConfig, HeuristicAnalyzer, NoopAnalyzer};

    #[test]
    fn test_defaults_without_analyzer() {
        let synthesizer = StorySynthesizer::new(Arc::new(NoopAnalyzer));
        let story = synthesizer.synthesize("archive closed support tickets");

        assert_eq!(
            story,
            "As a user, I want to archive closed support tickets so that I can improve the process"
        );
    }

    #[test]
    fn test_benefit_runs_without_analyzer() {
        let synthesizer = StorySynthesizer::new(Arc::new(NoopAnalyzer));
        let story = synthesizer.compose("export invoices so that finance can reconcile");

        assert_eq!(story.actor, "user");
        assert_eq!(story.benefit, "finance can reconcile");
    }

    #[test]
    fn test_to_clause_wins_over_so_that() {
        let synthesizer = StorySynthesizer::new(Arc::new(NoopAnalyzer));
        let story = synthesizer.compose("send alerts to managers so that nothing slips");

        assert_eq!(story.benefit, "managers so that nothing slips");
    }

    #[test]
    fn test_actor_and_action_from_analyzer() {
        let synthesizer = StorySynthesizer::new(Arc::new(HeuristicAnalyzer::default()));
        let story = synthesizer.compose("the admin can export monthly reports so that audits pass");

        assert_eq!(story.actor, "admin");
        assert_eq!(story.action, "export monthly reports");
        assert_eq!(story.benefit, "audits pass");
    }

    #[test]
    fn test_possessive_actor() {
        let synthesizer = StorySynthesizer::new(Arc::new(HeuristicAnalyzer::default()));
        let story = synthesizer.compose("update the customer's billing address");

        assert_eq!(story.actor, "customer");
        assert_eq!(story.action, "update the customer 's billing address");
    }

    #[test]
    fn test_short_verb_phrase_keeps_full_requirement() {
        let synthesizer = StorySynthesizer::new(Arc::new(HeuristicAnalyzer::default()));
        let story = synthesizer.compose("customer: log, always");

        assert_eq!(story.actor, "customer");
        assert_eq!(story.action, "customer: log, always");
    }

    #[test]
    fn test_analyzer_failure_keeps_defaults() {
        let analyzer = HeuristicAnalyzer::new(AnalyzerConfig { max_length: 3 });
        let synthesizer = StorySynthesizer::new(Arc::new(analyzer));
        let story = synthesizer.compose("the admin can export monthly reports");

        assert_eq!(story.actor, "user");
        assert_eq!(story.action, "the admin can export monthly reports");
    }

    #[test]
    fn test_story_shape() {
        let synthesizer = StorySynthesizer::new(Arc::new(HeuristicAnalyzer::default()));
        let shape = Regex::new(r"^As a .+, I want to .+ so that I can .+$").unwrap();

        for requirement in ["x", "let users reset their password", "the vendor wants to submit bids"] {
            let story = synthesizer.synthesize(requirement);
            assert!(shape.is_match(&story), "bad story shape: {}", story);
        }
    }
}
