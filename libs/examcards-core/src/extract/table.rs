//! Markdown table detector.

use once_cell::sync::Lazy;
use regex::Regex;

use super::keep_complete;
use crate::types::Card;

static TABLE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|(.+?)\|(.+?)\|").unwrap());

/// Requires at least three `| cell | cell |` rows (header, separator, and one
/// data row). The first two matched rows are skipped unconditionally; rows
/// whose first cell still carries a `---` separator artifact are dropped.
pub(super) fn detect(text: &str) -> Option<Vec<Card>> {
    let rows: Vec<(String, String)> = TABLE_ROW
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect();

    if rows.len() < 3 {
        return None;
    }

    let cards = keep_complete(
        rows.into_iter()
            .skip(2)
            .filter(|(question, _)| !question.contains("---"))
            .collect(),
    );
    if cards.is_empty() {
        None
    } else {
        Some(cards)
    }
}
