//! Heuristic structural repair for truncated or sloppy JSON arrays.
//!
//! The target shape is narrow and known (a flat array of two-field
//! question/answer objects), so a targeted object pattern is far more
//! reliable against partial or garbled input than trying to fix arbitrary
//! JSON syntax errors.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// A complete `{ "question": "...", "answer": "..." }` object. The value
/// pattern is quote-aware: an escaped quote inside a string does not
/// terminate the match.
static OBJECT_QA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\{\s*"question"\s*:\s*"(?:[^"\\]|\\.)*"\s*,\s*"answer"\s*:\s*"(?:[^"\\]|\\.)*"\s*\}"#,
    )
    .unwrap()
});

/// The same object shape with the keys in the other order.
static OBJECT_AQ: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"\{\s*"answer"\s*:\s*"(?:[^"\\]|\\.)*"\s*,\s*"question"\s*:\s*"(?:[^"\\]|\\.)*"\s*\}"#,
    )
    .unwrap()
});

/// A `{` opening straight into a key: heuristic upper bound on how many
/// objects the AI intended to emit.
static OBJECT_START: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\{\s*""#).unwrap());

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\s*[\]\}])").unwrap());

#[derive(Debug, Clone)]
pub(super) struct RepairOutcome {
    pub json: String,
    pub repaired: bool,
    pub warning: Option<String>,
}

/// Repair common paste damage before handing the text to the JSON parser:
/// truncation mid-object and trailing commas before a closer.
pub(super) fn repair_json(raw: &str) -> RepairOutcome {
    let mut text = raw.trim().to_string();
    let mut repaired = false;
    let mut warning = None;

    let truncated = char_count(&text, '[') > char_count(&text, ']')
        || char_count(&text, '{') > char_count(&text, '}');
    if truncated {
        let outcome = repair_truncated(&text);
        text = outcome.json;
        repaired = outcome.repaired;
        warning = outcome.warning;
    }

    let stripped = TRAILING_COMMA.replace_all(&text, "$1").into_owned();
    if stripped != text {
        repaired = true;
    }

    RepairOutcome {
        json: stripped,
        repaired,
        warning,
    }
}

fn repair_truncated(text: &str) -> RepairOutcome {
    let objects: Vec<&str> = OBJECT_QA.find_iter(text).map(|m| m.as_str()).collect();
    if !objects.is_empty() {
        return rebuild_from_objects(&objects, text);
    }

    // Key order is not guaranteed; only consulted when the primary order
    // found nothing at all.
    let alt: Vec<&str> = OBJECT_AQ.find_iter(text).map(|m| m.as_str()).collect();
    if !alt.is_empty() {
        return rebuild_from_objects(&alt, text);
    }

    balance_closers(text)
}

/// Discard everything except the complete objects and rebuild a fresh,
/// well-formed array around them, in found order.
fn rebuild_from_objects(objects: &[&str], original: &str) -> RepairOutcome {
    let expected = OBJECT_START.find_iter(original).count();
    let found = objects.len();

    let json = format!("[\n  {}\n]", objects.join(",\n  "));
    debug!(found, expected, "rebuilt json array from complete objects");

    let warning = if found < expected {
        let lost = expected - found;
        format!(
            "JSON was truncated. Recovered {found} complete card{} ({lost} incomplete card{} removed). Please check if any cards are missing.",
            plural(found),
            plural(lost),
        )
    } else {
        "JSON was repaired automatically. Please verify all cards are correct.".to_string()
    };

    RepairOutcome {
        json,
        repaired: true,
        warning: Some(warning),
    }
}

/// Last resort when not even one complete object survived (the cut landed
/// inside the first object): terminate an open string literal, then append
/// enough closers to balance the brace and bracket counts.
fn balance_closers(text: &str) -> RepairOutcome {
    let mut json = text.to_string();

    let quote_added = unescaped_quotes(text) % 2 != 0;
    if quote_added {
        json.push('"');
    }

    let missing_braces = char_count(&json, '{').saturating_sub(char_count(&json, '}'));
    let missing_brackets = char_count(&json, '[').saturating_sub(char_count(&json, ']'));

    for _ in 0..missing_braces {
        json.push('}');
    }
    for _ in 0..missing_brackets {
        json.push(']');
    }

    let repaired = quote_added || missing_braces > 0 || missing_brackets > 0;
    let warning = if missing_braces > 0 || missing_brackets > 0 {
        let mut parts = Vec::new();
        if missing_brackets > 0 {
            parts.push(format!("{missing_brackets} ']'"));
        }
        if missing_braces > 0 {
            parts.push(format!("{missing_braces} '}}'"));
        }
        Some(format!(
            "JSON was incomplete (missing {}). Auto-repaired, please verify all cards.",
            parts.join(" and ")
        ))
    } else {
        None
    };

    RepairOutcome {
        json,
        repaired,
        warning,
    }
}

/// Count `"` characters that are not escaped, tracking backslash runs so
/// `\\"` still counts as a string boundary.
fn unescaped_quotes(text: &str) -> usize {
    let mut quotes = 0;
    let mut escaped = false;
    for ch in text.chars() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            quotes += 1;
        }
    }
    quotes
}

fn char_count(text: &str, target: char) -> usize {
    text.chars().filter(|&c| c == target).count()
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn untouched_input_is_not_marked_repaired() {
        let input = r#"[{"question": "q", "answer": "a"}]"#;
        let outcome = repair_json(input);
        assert!(!outcome.repaired);
        assert_eq!(outcome.warning, None);
        assert_eq!(outcome.json, input);
    }

    #[test]
    fn strips_trailing_comma_and_flags_repair() {
        let outcome = repair_json(r#"[{"question":"a","answer":"b"},]"#);
        assert!(outcome.repaired);
        assert_eq!(outcome.warning, None);
        assert_eq!(outcome.json, r#"[{"question":"a","answer":"b"}]"#);
    }

    #[test]
    fn rebuilds_from_complete_objects_when_truncated() {
        let input = r#"[{"question":"q1","answer":"a1"},{"question":"q2","answer":"a2"},{"question":"q3","ans"#;
        let outcome = repair_json(input);
        assert!(outcome.repaired);
        let warning = outcome.warning.unwrap();
        assert!(warning.contains("Recovered 2 complete cards"));
        assert!(warning.contains("1 incomplete card removed"));

        let parsed: serde_json::Value = serde_json::from_str(&outcome.json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn handles_answer_first_key_order() {
        let input = r#"[{"answer":"a1","question":"q1"},{"answer":"a2","quest"#;
        let outcome = repair_json(input);
        assert!(outcome.repaired);
        let parsed: serde_json::Value = serde_json::from_str(&outcome.json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["question"], "q1");
    }

    #[test]
    fn escaped_quotes_do_not_terminate_a_value() {
        let input = r#"[{"question":"say \"hi\"","answer":"greeting"},{"question":"trunc"#;
        let outcome = repair_json(input);
        let parsed: serde_json::Value = serde_json::from_str(&outcome.json).unwrap();
        assert_eq!(parsed[0]["question"], r#"say "hi""#);
    }

    #[test]
    fn balances_closers_when_no_object_is_complete() {
        let outcome = repair_json(r#"[{"question":"only a fragm"#);
        assert!(outcome.repaired);
        let warning = outcome.warning.unwrap();
        assert!(warning.contains("1 ']'"));
        assert!(warning.contains("1 '}'"));
        // The result is structurally closed even though the object is junk.
        assert!(outcome.json.ends_with(r#"fragm"}]"#));
    }

    #[test]
    fn balancing_counts_quotes_with_escapes() {
        // Ends inside a string whose last character is an escaped backslash.
        let outcome = repair_json(r#"[{"question":"path \\"#);
        assert!(outcome.json.ends_with(r#"\\"}]"#));
    }

    #[test]
    fn mild_warning_when_nothing_was_lost() {
        // Only the closing bracket is missing; every object is complete.
        let input = r#"[{"question":"q1","answer":"a1"},{"question":"q2","answer":"a2"}"#;
        let outcome = repair_json(input);
        assert!(outcome.repaired);
        assert_eq!(
            outcome.warning.unwrap(),
            "JSON was repaired automatically. Please verify all cards are correct."
        );
        let parsed: serde_json::Value = serde_json::from_str(&outcome.json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }
}
