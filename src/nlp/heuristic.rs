use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::{AnalyzerError, Entity, EntityLabel, LinguisticAnalyzer, PartOfSpeech, TaggedToken};

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+(?:['’-]\w+)*|[^\w\s]").expect("hardcoded regex pattern is valid")
});

/// Word with a trailing English clitic: "customer's", "don't", "we'll"
static CLITIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(n['’]t|['’](?:s|re|ll|ve|d|m))$")
        .expect("hardcoded regex pattern is valid")
});

/// Helper verbs, tagged as auxiliaries rather than main verbs
const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having", "do",
    "does", "did",
];

/// Base-form verbs commonly heard when people describe software needs
const VERBS: &[&str] = &[
    "access", "add", "allow", "approve", "archive", "assign", "automate", "book", "build",
    "calculate", "cancel", "change", "check", "close", "configure", "create", "delete", "display",
    "download", "edit", "enable", "export", "filter", "find", "generate", "get", "handle",
    "import", "improve", "integrate", "invite", "let", "log", "login", "make", "manage", "modify",
    "monitor", "need", "notify", "open", "pay", "print", "process", "provide", "publish",
    "receive", "record", "reduce", "register", "remove", "reply", "report", "request", "require",
    "reset", "respond", "restore", "review", "save", "schedule", "search", "see", "select",
    "send", "set", "share", "show", "sign", "sort", "store", "streamline", "submit", "support",
    "sync", "track", "update", "upload", "use", "validate", "verify", "view", "want",
];

/// Words after which the next content word is read as a verb
const MODALS: &[&str] = &[
    "should", "must", "can", "will", "shall", "could", "would", "may", "might",
];

/// Words that turn a following "to" into an infinitive marker
const INFINITIVE_HEADS: &[&str] = &[
    "need", "needs", "want", "wants", "able", "going", "like", "have", "has", "ought", "try",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "our", "your", "their", "his",
    "her", "its", "each", "every", "any", "some", "no",
];

const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "be", "not", "also", "only", "always", "never", "then", "just", "to", "we",
    "they", "it", "i", "you",
];

/// Tokens that close the clause a verb governs
const CLAUSE_BREAKS: &[&str] = &[
    "so", "because", "since", "although", "though", "unless", "whereas", "while",
];

/// Capitalized words that never start or continue a person name
const NON_NAME_WORDS: &[&str] = &[
    // roles and departments
    "admin", "administrator", "analyst", "business", "ceo", "cfo", "chief", "client", "cto",
    "customer", "designer", "developer", "director", "employee", "engineer", "finance", "head",
    "hr", "lead", "manager", "marketing", "officer", "operations", "owner", "president",
    "product", "project", "qa", "sales", "support", "system", "team", "tester", "user", "users",
    "vendor", "vp",
    // calendar
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "june", "july", "august", "september", "october", "november",
    "december", "today", "tomorrow", "yesterday",
    // sentence starters and pronouns
    "a", "also", "an", "and", "but", "he", "hello", "hi", "i", "if", "it", "let", "no", "ok",
    "okay", "our", "please", "she", "so", "thanks", "that", "the", "then", "these", "they",
    "this", "those", "we", "when", "yes", "you",
];

const HONORIFICS: &[&str] = &["mr", "mrs", "ms", "dr", "prof"];

const ORGANIZATION_SUFFIXES: &[&str] = &["inc", "ltd", "corp", "llc", "gmbh"];

/// Configuration for the heuristic analyzer
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Longest input, in characters, the analyzer accepts
    pub max_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_length: 1_000_000,
        }
    }
}

/// Rule-based linguistic backend
///
/// Uses fixed lexicons and capitalization cues instead of a trained model:
/// - sentences follow Unicode sentence boundaries
/// - clitics ("'s", "n't", "'ll") are split from their word, hyphenated compounds are not
/// - verbs come from a lexicon or follow a modal / infinitive marker
/// - a verb governs the tokens after it up to the end of its clause
/// - person names are runs of capitalized words outside the role vocabulary
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer {
    config: AnalyzerConfig,
}

impl HeuristicAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    fn check_length(&self, text: &str) -> Result<(), AnalyzerError> {
        let length = text.chars().count();
        if length > self.config.max_length {
            return Err(AnalyzerError::TextTooLong {
                length,
                max_length: self.config.max_length,
            });
        }
        Ok(())
    }
}

impl LinguisticAnalyzer for HeuristicAnalyzer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn sentences(&self, text: &str) -> Result<Vec<String>, AnalyzerError> {
        self.check_length(text)?;
        Ok(split_sentences(text))
    }

    fn tokens(&self, text: &str) -> Result<Vec<TaggedToken>, AnalyzerError> {
        self.check_length(text)?;
        Ok(tag_tokens(text))
    }

    fn entities(&self, text: &str) -> Result<Vec<Entity>, AnalyzerError> {
        self.check_length(text)?;
        Ok(find_entities(text))
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for m in TOKEN_REGEX.find_iter(text) {
        match CLITIC_REGEX.captures(m.as_str()) {
            Some(caps) => words.extend(caps.iter().skip(1).flatten().map(|c| c.as_str())),
            None => words.push(m.as_str()),
        }
    }
    words
}

fn is_punctuation(word: &str) -> bool {
    !word.chars().any(char::is_alphanumeric)
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn tag_tokens(text: &str) -> Vec<TaggedToken> {
    let words = split_words(text);
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    let tags: Vec<PartOfSpeech> = (0..words.len())
        .map(|i| tag_word(&words, &lowered, i))
        .collect();

    tags.iter()
        .enumerate()
        .map(|(i, &pos)| {
            let subtree = if pos == PartOfSpeech::Verb {
                i..clause_end(&lowered, &tags, i)
            } else {
                i..i + 1
            };
            TaggedToken {
                text: words[i].to_string(),
                pos,
                subtree,
            }
        })
        .collect()
}

fn tag_word(words: &[&str], lowered: &[String], i: usize) -> PartOfSpeech {
    let word = words[i];
    let lower = lowered[i].as_str();

    if is_punctuation(word) {
        return PartOfSpeech::Punctuation;
    }
    if AUXILIARIES.contains(&lower) {
        return PartOfSpeech::Auxiliary;
    }

    let prev = i.checked_sub(1).map(|p| lowered[p].as_str());
    let prev_prev = i.checked_sub(2).map(|p| lowered[p].as_str());

    let after_determiner = prev.is_some_and(|p| DETERMINERS.contains(&p));
    if VERBS.contains(&lower) && !after_determiner {
        return PartOfSpeech::Verb;
    }

    // "users should export", "we need to export"
    let after_modal = prev.is_some_and(|p| MODALS.contains(&p));
    let after_infinitive =
        prev == Some("to") && prev_prev.is_some_and(|p| INFINITIVE_HEADS.contains(&p));
    if (after_modal || after_infinitive)
        && !FUNCTION_WORDS.contains(&lower)
        && word.chars().next().is_some_and(char::is_alphabetic)
    {
        return PartOfSpeech::Verb;
    }

    PartOfSpeech::Other
}

/// Exclusive end index of the clause governed by the verb at `verb_idx`
fn clause_end(lowered: &[String], tags: &[PartOfSpeech], verb_idx: usize) -> usize {
    let mut end = verb_idx + 1;
    while end < lowered.len() {
        let lower = lowered[end].as_str();
        if tags[end] == PartOfSpeech::Punctuation || CLAUSE_BREAKS.contains(&lower) {
            break;
        }
        if lower == "in" && lowered.get(end + 1).is_some_and(|next| next == "order") {
            break;
        }
        end += 1;
    }
    end
}

fn find_entities(text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    let mut after_honorific = false;
    let mut prev_was_honorific = false;

    for word in split_words(text) {
        let lower = word.to_lowercase();

        // "Dr." keeps the honorific context across its period
        if prev_was_honorific && word == "." {
            continue;
        }
        prev_was_honorific = false;

        if HONORIFICS.contains(&lower.as_str()) {
            flush_run(&mut entities, &mut run, after_honorific);
            after_honorific = true;
            prev_was_honorific = true;
            continue;
        }

        let name_like = !is_punctuation(word)
            && is_capitalized(word)
            && !NON_NAME_WORDS.contains(&lower.as_str());

        if name_like {
            run.push(word);
        } else {
            flush_run(&mut entities, &mut run, after_honorific);
            after_honorific = false;
        }
    }
    flush_run(&mut entities, &mut run, after_honorific);

    entities
}

fn flush_run(entities: &mut Vec<Entity>, run: &mut Vec<&str>, after_honorific: bool) {
    let qualifies = run.len() >= 2 || (after_honorific && !run.is_empty());
    if qualifies {
        let is_organization = run
            .last()
            .is_some_and(|w| ORGANIZATION_SUFFIXES.contains(&w.to_lowercase().as_str()));
        entities.push(Entity {
            text: run.join(" "),
            label: if is_organization {
                EntityLabel::Organization
            } else {
                EntityLabel::Person
            },
        });
    }
    run.clear();
}
