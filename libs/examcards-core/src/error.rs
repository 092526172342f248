//! Error types for examcards-core.
//!
//! Expected "format didn't match" outcomes inside the extractor are plain
//! `Option`s; these enums cover the failures that reach the user.

use thiserror::Error;

/// Result type alias; defaults to the extraction error domain.
pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

/// Extraction failed as a whole: none of the four detectors recognized the
/// input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Surfaced as a generic message with no further detail, since the cause
    /// could be any of four incompatible format mismatches.
    #[error("could not parse any cards from the pasted text, check the formatting")]
    NoParseMatch,
}

/// Validation failure on a candidate card sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("no cards found")]
    EmptyDeck,

    /// One aggregated message covering every offending card, so the user can
    /// fix them all in a single review pass.
    #[error("{}", .issues.join("; "))]
    IncompleteCards { issues: Vec<String> },
}
