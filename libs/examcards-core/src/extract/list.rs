//! Numbered-list detector.
//!
//! The `regex` crate has no lookahead, so instead of one pattern terminated
//! by `(?=\n\d+\.)` the text is split into blocks at numbered-item
//! boundaries and each block is parsed on its own.

use once_cell::sync::Lazy;
use regex::Regex;

use super::keep_complete;
use crate::types::Card;

/// First numbered item anywhere in the text.
static FIRST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.").unwrap());

/// A later item boundary: a newline straight into `N.`.
static ITEM_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\d+\.").unwrap());

/// One block: `N.`, an optional Q/Question label, the question text, then a
/// line introducing the answer. The answer runs to the end of the block.
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^\s*\d+\.\s*(?:q(?:uestion)?[:.]?\s*)?(.+?)\n\s*a(?:nswer)?[:.]?\s*(.+)")
        .unwrap()
});

pub(super) fn detect(text: &str) -> Option<Vec<Card>> {
    let first = FIRST_ITEM.find(text)?;
    let tail = &text[first.start()..];

    let mut blocks = Vec::new();
    let mut block_start = 0;
    for boundary in ITEM_BOUNDARY.find_iter(tail) {
        blocks.push(&tail[block_start..boundary.start()]);
        block_start = boundary.start() + 1; // drop the newline, keep the number
    }
    blocks.push(&tail[block_start..]);

    let cards = keep_complete(
        blocks
            .iter()
            .filter_map(|block| {
                LIST_ITEM
                    .captures(block)
                    .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            })
            .collect(),
    );
    if cards.is_empty() {
        None
    } else {
        Some(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_labelled_items() {
        let input = "\
            1. Q: What is photosynthesis?\n\
            A: The process plants use to convert light into chemical energy.\n\
            2. Q: Where does it occur?\n\
            A: In the chloroplasts.\n";
        let cards = detect(input).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "What is photosynthesis?");
        assert_eq!(cards[1].answer, "In the chloroplasts.");
        assert_eq!(cards[1].order, 1);
    }

    #[test]
    fn labels_are_optional_and_case_insensitive() {
        let input = "1. What is H2O?\nanswer: Water\n2. question. What is NaCl?\nA. Salt";
        let cards = detect(input).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "What is H2O?");
        assert_eq!(cards[0].answer, "Water");
        assert_eq!(cards[1].question, "What is NaCl?");
        assert_eq!(cards[1].answer, "Salt");
    }

    #[test]
    fn multiline_answers_run_to_the_next_item() {
        let input = "1. Q: Explain osmosis\nA: Movement of water\nacross a membrane.\n2. Q: q2\nA: a2";
        let cards = detect(input).unwrap();
        assert_eq!(cards[0].answer, "Movement of water\nacross a membrane.");
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn item_without_an_answer_line_is_dropped() {
        let input = "1. Q: orphan question\n2. Q: real question\nA: real answer";
        let cards = detect(input).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "real question");
        assert_eq!(cards[0].order, 0);
    }

    #[test]
    fn prose_without_numbered_items_is_no_match() {
        assert!(detect("No numbering here, just text.").is_none());
    }
}
