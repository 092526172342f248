//! JSON array detector, first in the priority order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use super::{keep_complete, repair};
use crate::types::{ParseFormat, ParseResult};

/// Fenced code block, optionally tagged `json`. The cleaning stage removes
/// line-leading fences, but fences pasted mid-line survive it.
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap());

const QUESTION_KEYS: &[&str] = &["question", "q", "front"];
const ANSWER_KEYS: &[&str] = &["answer", "a", "back"];

/// Locate the candidate array span: a fenced block wins, then the greedy
/// first-`[`-to-last-`]` span, then (the truncated-paste case, where the
/// closing bracket never arrived) first `[` to the end of the text.
fn locate_array(text: &str) -> Option<&str> {
    if let Some(caps) = FENCED_BLOCK.captures(text) {
        return Some(caps.get(1).unwrap().as_str());
    }
    let start = text.find('[')?;
    match text.rfind(']') {
        Some(end) if end > start => Some(&text[start..=end]),
        _ => Some(&text[start..]),
    }
}

/// First value under any of the accepted key spellings that is a non-empty
/// string.
fn field<'a>(item: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .filter_map(|key| item.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

pub(super) fn detect(text: &str) -> Option<ParseResult> {
    let span = locate_array(text)?;
    let outcome = repair::repair_json(span);

    let parsed: Value = serde_json::from_str(&outcome.json).ok()?;
    let items = match parsed {
        Value::Array(items) if !items.is_empty() => items,
        _ => return None,
    };

    let original_count = items.len();
    let cards = keep_complete(
        items
            .iter()
            .map(|item| {
                (
                    field(item, QUESTION_KEYS).to_string(),
                    field(item, ANSWER_KEYS).to_string(),
                )
            })
            .collect(),
    );
    if cards.is_empty() {
        return None;
    }

    if let Some(warning) = &outcome.warning {
        warn!(%warning, "json input needed structural repair");
    }

    let valid_count = cards.len();
    Some(ParseResult {
        cards,
        format: ParseFormat::Json,
        repaired: outcome.repaired,
        warning: outcome.warning,
        original_count: Some(original_count),
        valid_count: Some(valid_count),
    })
}
