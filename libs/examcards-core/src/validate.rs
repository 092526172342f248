//! Final validation gate before a deck is saved.

use crate::error::{Result, ValidateError};
use crate::types::Card;

/// Check a candidate card sequence for save-ability and hand it back
/// unchanged on success.
///
/// Intentionally redundant with the extractor's own per-card filtering:
/// cards reach this point through manual edits in the review step, not just
/// through parsing.
pub fn validate_cards(cards: Vec<Card>) -> Result<Vec<Card>, ValidateError> {
    if cards.is_empty() {
        return Err(ValidateError::EmptyDeck);
    }

    let issues: Vec<String> = cards
        .iter()
        .enumerate()
        .flat_map(|(index, card)| {
            let mut found = Vec::new();
            if card.question.trim().is_empty() {
                found.push(format!("Card {}: Missing question", index + 1));
            }
            if card.answer.trim().is_empty() {
                found.push(format!("Card {}: Missing answer", index + 1));
            }
            found
        })
        .collect();

    if issues.is_empty() {
        Ok(cards)
    } else {
        Err(ValidateError::IncompleteCards { issues })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(question: &str, answer: &str, order: usize) -> Card {
        Card {
            question: question.to_string(),
            answer: answer.to_string(),
            order,
        }
    }

    #[test]
    fn empty_sequence_is_an_empty_deck() {
        assert_eq!(validate_cards(vec![]), Err(ValidateError::EmptyDeck));
    }

    #[test]
    fn valid_cards_come_back_unchanged() {
        let cards = vec![card("q1", "a1", 0), card("q2", "a2", 1)];
        assert_eq!(validate_cards(cards.clone()), Ok(cards));
    }

    #[test]
    fn every_offender_is_reported_in_one_message() {
        let cards = vec![
            card("q1", "a1", 0),
            card("  ", "a2", 1),
            card("q3", "", 2),
            card("", "", 3),
        ];
        let err = validate_cards(cards).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Card 2: Missing question; Card 3: Missing answer; \
             Card 4: Missing question; Card 4: Missing answer"
        );
    }
}
