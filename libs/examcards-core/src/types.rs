//! Core types for the deck-building pipeline.

use serde::{Deserialize, Serialize};

/// One question/answer pair with its position in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
    /// Zero-based display/study position, contiguous and unique within one
    /// extraction result.
    pub order: usize,
}

/// Which detector produced a parse result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFormat {
    Json,
    Table,
    List,
    Qa,
}

impl ParseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Table => "table",
            Self::List => "list",
            Self::Qa => "qa",
        }
    }
}

/// Outcome of one extraction attempt.
///
/// Created fresh for every paste-and-parse action and immediately consumed
/// by the review step; nothing here has cross-call identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    pub cards: Vec<Card>,
    pub format: ParseFormat,
    /// True if the raw input needed structural repair before it parsed.
    pub repaired: bool,
    /// Set when repair happened or a known data loss occurred; must be shown
    /// to the user so the recovered set can be verified by hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Array elements present after JSON parsing (json format only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_count: Option<usize>,
    /// Elements surviving the non-empty filter (json format only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_count: Option<usize>,
}

impl ParseResult {
    /// Result for the plain-text detectors, which never repair their input.
    pub(crate) fn plain(cards: Vec<Card>, format: ParseFormat) -> Self {
        Self {
            cards,
            format,
            repaired: false,
            warning: None,
            original_count: None,
            valid_count: None,
        }
    }
}

/// Outcome of one answer check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the typed answer is accepted as correct.
    #[serde(rename = "match")]
    pub is_match: bool,
    /// Similarity in [0, 1]; 1.0 means identical after normalization.
    pub score: f64,
}
