//! AI-response-to-flashcard extraction.
//!
//! Raw pasted text is cleaned once, then handed to the format detectors in a
//! fixed priority order: JSON, markdown table, numbered list, inline Q/A.
//! The first detector that succeeds wins, even when a later one would have
//! recovered more cards. Known limitation carried over from the original
//! behavior: a stray `[` early in otherwise table-shaped text is claimed by
//! the JSON detector first; if the claimed span fails to parse the table
//! detector still gets its turn, but a *valid* JSON span always wins.

mod clean;
mod json;
mod list;
mod qa;
mod repair;
mod table;

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::types::{Card, ParseFormat, ParseResult};

pub use clean::clean_pasted_text;

/// Convert raw pasted text into a structured parse result.
pub fn extract_cards(raw_text: &str) -> Result<ParseResult> {
    let cleaned = clean::clean_pasted_text(raw_text);

    if let Some(result) = json::detect(&cleaned) {
        debug!(
            cards = result.cards.len(),
            repaired = result.repaired,
            "json detector matched"
        );
        return Ok(result);
    }
    if let Some(cards) = table::detect(&cleaned) {
        debug!(cards = cards.len(), "table detector matched");
        return Ok(ParseResult::plain(cards, ParseFormat::Table));
    }
    if let Some(cards) = list::detect(&cleaned) {
        debug!(cards = cards.len(), "numbered list detector matched");
        return Ok(ParseResult::plain(cards, ParseFormat::List));
    }
    if let Some(cards) = qa::detect(&cleaned) {
        debug!(cards = cards.len(), "inline q/a detector matched");
        return Ok(ParseResult::plain(cards, ParseFormat::Qa));
    }

    Err(ExtractError::NoParseMatch)
}

/// Trim both fields, drop candidates where either is empty, and assign
/// contiguous zero-based order values to the survivors.
pub(crate) fn keep_complete(candidates: Vec<(String, String)>) -> Vec<Card> {
    candidates
        .into_iter()
        .filter_map(|(question, answer)| {
            let question = question.trim();
            let answer = answer.trim();
            if question.is_empty() || answer.is_empty() {
                None
            } else {
                Some((question.to_string(), answer.to_string()))
            }
        })
        .enumerate()
        .map(|(order, (question, answer))| Card {
            question,
            answer,
            order,
        })
        .collect()
}
