//! Inline Q:/A: detector, last in the priority order.
//!
//! Segments start at each question marker and run to the next marker or the
//! end of the text. The original behavior accepted a bare `Q` with no
//! delimiter, but without lookahead that degenerates to splitting on every
//! letter q, so a `:` or `.` delimiter is required here.

use once_cell::sync::Lazy;
use regex::Regex;

use super::keep_complete;
use crate::types::Card;

/// Opens a question segment: `Q:`, `Q.`, `Question:`, any casing.
static Q_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)q(?:uestion)?[:.]").unwrap());

/// One segment: question text up to an answer marker, answer text after it.
static QA_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^q(?:uestion)?[:.]\s*(.+?)\s*\ba(?:nswer)?[:.]\s*(.+)").unwrap()
});

pub(super) fn detect(text: &str) -> Option<Vec<Card>> {
    let starts: Vec<usize> = Q_MARKER.find_iter(text).map(|m| m.start()).collect();
    if starts.is_empty() {
        return None;
    }

    let mut candidates = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        if let Some(caps) = QA_PAIR.captures(&text[start..end]) {
            candidates.push((caps[1].to_string(), caps[2].to_string()));
        }
    }

    let cards = keep_complete(candidates);
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
    fn parses_q_a_pairs_across_lines() {
        let input = "Q: What is the capital of France?\nA: Paris\nQ: And of Spain?\nA: Madrid";
        let cards = detect(input).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "What is the capital of France?");
        assert_eq!(cards[0].answer, "Paris");
        assert_eq!(cards[1].question, "And of Spain?");
        assert_eq!(cards[1].order, 1);
    }

    #[test]
    fn long_form_labels_and_periods_work() {
        let input = "Question: Define diffusion\nAnswer: Net movement of particles.\nquestion. q2\nanswer. a2";
        let cards = detect(input).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].answer, "Net movement of particles.");
    }

    #[test]
    fn pairs_on_a_single_line_are_split() {
        let input = "Q: one plus one? A: two Q: two plus two? A: four";
        let cards = detect(input).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "one plus one?");
        assert_eq!(cards[0].answer, "two");
        assert_eq!(cards[1].answer, "four");
    }

    #[test]
    fn question_without_an_answer_is_dropped() {
        let input = "Q: lonely question\nQ: paired question\nA: paired answer";
        let cards = detect(input).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question, "paired question");
    }

    #[test]
    fn plain_prose_is_no_match() {
        assert!(detect("There are no markers in this sentence.").is_none());
    }

    #[test]
    fn bare_labels_without_a_delimiter_are_rejected() {
        // Deliberate: a marker needs its `:` or `.`, otherwise any word
        // containing the letter q would open a segment.
        assert!(detect("Question What is X\nAnswer Y").is_none());
    }
}
