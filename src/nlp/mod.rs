pub mod heuristic;
pub mod noop;

pub use heuristic::*;
pub use noop::*;

use std::ops::Range;

use thiserror::Error;

/// Coarse part-of-speech tags produced by an analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Verb,
    /// Forms of be/have/do used as helpers
    Auxiliary,
    Punctuation,
    Other,
}

/// A token with its tag and the span of tokens that depend on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Token text as it appears in the input
    pub text: String,
    /// Part-of-speech tag
    pub pos: PartOfSpeech,
    /// Indices of this token's subtree (itself included) within the token list
    pub subtree: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
}

/// A named entity found in text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

/// Failures raised by a linguistic backend
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Text of length {length} exceeds maximum of {max_length} characters")]
    TextTooLong { length: usize, max_length: usize },
}

/// Optional linguistic capability used by the extraction components
///
/// Callers always go through this interface; when no real backend is
/// available the [`NoopAnalyzer`] is installed instead. Errors are never
/// fatal to the caller, each component falls back to its pattern-only path.
pub trait LinguisticAnalyzer: Send + Sync {
    /// Short backend name for logging
    fn name(&self) -> &'static str;

    /// Split text into sentences
    fn sentences(&self, text: &str) -> Result<Vec<String>, AnalyzerError>;

    /// Tokenize and tag text
    fn tokens(&self, text: &str) -> Result<Vec<TaggedToken>, AnalyzerError>;

    /// Recognize named entities
    fn entities(&self, text: &str) -> Result<Vec<Entity>, AnalyzerError>;
}
