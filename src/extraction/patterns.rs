use std::sync::LazyLock;

use regex::Regex;

/// Phrasings that introduce a requirement; group 1 captures the requirement itself
pub const REQUIREMENT_PATTERNS: &[&str] = &[
    r"we need to\s+(.+?)(?:\.|$)",
    r"the system should\s+(.+?)(?:\.|$)",
    r"users? (?:should be able to|must|need to)\s+(.+?)(?:\.|$)",
    r"requirement is to\s+(.+?)(?:\.|$)",
    r"we want to\s+(.+?)(?:\.|$)",
    r"it should\s+(.+?)(?:\.|$)",
    r"must have\s+(.+?)(?:\.|$)",
    r"looking for\s+(.+?)(?:\.|$)",
];

/// Nouns naming who a requirement is for
pub const ACTOR_KEYWORDS: &[&str] = &[
    "user", "customer", "admin", "manager", "employee", "system", "client", "vendor",
];

/// Verbs naming what a requirement lets an actor do
pub const ACTION_VERBS: &[&str] = &[
    "create", "view", "update", "delete", "manage", "access", "generate", "submit", "approve",
    "track", "monitor", "search", "filter", "export", "import",
];

static STANDARD_LIBRARY: LazyLock<PatternLibrary> = LazyLock::new(|| {
    let patterns = REQUIREMENT_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("hardcoded regex pattern is valid"))
        .collect();

    PatternLibrary {
        patterns,
        actors: ACTOR_KEYWORDS,
        action_verbs: ACTION_VERBS,
    }
});

/// Fixed, ordered set of requirement patterns plus actor and verb vocabularies
#[derive(Debug)]
pub struct PatternLibrary {
    patterns: Vec<Regex>,
    actors: &'static [&'static str],
    action_verbs: &'static [&'static str],
}

impl PatternLibrary {
    /// The built-in library, compiled once per process
    pub fn standard() -> &'static PatternLibrary {
        &STANDARD_LIBRARY
    }

    /// Requirement patterns in declaration order (all case-insensitive)
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Whether a single word is an actor noun, ignoring case
    pub fn is_actor(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.actors.iter().any(|a| *a == lower)
    }

    /// Whether any actor noun occurs anywhere in the text, ignoring case
    pub fn mentions_actor(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.actors.iter().any(|a| lower.contains(a))
    }

    /// Whether any action verb occurs anywhere in the text, ignoring case
    pub fn mentions_action_verb(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.action_verbs.iter().any(|v| lower.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_library_compiles_all_patterns() {
        let library = PatternLibrary::standard();
        assert_eq!(library.patterns().len(), REQUIREMENT_PATTERNS.len());
    }

    #[test]
    fn test_pattern_captures_requirement() {
        let library = PatternLibrary::standard();
        let captures = library.patterns()[1]
            .captures("The System Should archive old invoices. Thanks")
            .unwrap();

        assert_eq!(&captures[1], "archive old invoices");
    }

    #[test]
    fn test_actor_checks() {
        let library = PatternLibrary::standard();

        assert!(library.is_actor("Admin"));
        assert!(!library.is_actor("users"));
        assert!(library.mentions_actor("All Customers get a receipt"));
        assert!(library.mentions_action_verb("They EXPORT the ledger"));
        assert!(!library.mentions_action_verb("nothing to do here"));
    }
}
