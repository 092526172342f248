//! Cleaning stage for pasted AI responses.

use once_cell::sync::Lazy;
use regex::Regex;

/// Filler a chat AI tends to emit before the actual payload ("Here:",
/// "json", "Flashcards:", ...). Anything else before the array is kept.
static FILLER_PREAMBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:here|json|output|response|flashcards|cards)?:?\s*$").unwrap()
});

static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^```(?:json)?\s*").unwrap());
static FENCE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)```\s*$").unwrap());

/// Strip copy/paste noise from raw text: code fence markers, BOM and
/// zero-width characters, mixed line endings, and a filler preamble before
/// the first `[`. Idempotent, and never removes anything that is not pure
/// formatting noise. The preamble check runs last so a preamble that is
/// itself fence noise ("Here:\n```json") is fully removed in one pass.
pub fn clean_pasted_text(text: &str) -> String {
    let cleaned = FENCE_OPEN.replace_all(text, "");
    let cleaned = FENCE_CLOSE.replace_all(&cleaned, "");

    let cleaned: String = cleaned
        .chars()
        .filter(|c| !matches!(c, '\u{FEFF}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}'))
        .collect();

    let cleaned = cleaned.replace("\r\n", "\n").replace('\r', "\n");
    let cleaned = cleaned.trim();

    if let Some(start) = cleaned.find('[') {
        if start > 0 && FILLER_PREAMBLE.is_match(cleaned[..start].trim()) {
            return cleaned[start..].to_string();
        }
    }

    cleaned.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_filler_preamble_before_array() {
        assert_eq!(clean_pasted_text("Here:\n[1, 2]"), "[1, 2]");
        assert_eq!(clean_pasted_text("json\n[1]"), "[1]");
        assert_eq!(clean_pasted_text("Flashcards:\n[1]"), "[1]");
    }

    #[test]
    fn keeps_meaningful_preamble() {
        let input = "The periodic table [see appendix]";
        assert_eq!(clean_pasted_text(input), input);
    }

    #[test]
    fn strips_code_fences() {
        assert_eq!(clean_pasted_text("```json\n[1]\n```"), "[1]");
        assert_eq!(clean_pasted_text("```\n[1]\n```"), "[1]");
    }

    #[test]
    fn strips_bom_and_zero_width_characters() {
        assert_eq!(clean_pasted_text("\u{FEFF}[1,\u{200B}2]"), "[1,2]");
    }

    #[test]
    fn normalizes_line_endings() {
        assert_eq!(clean_pasted_text("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let inputs = [
            "Here:\n```json\n[{\"question\": \"q\"}]\n```",
            "\u{FEFF}output: [1]\r\n",
            "plain text with no noise",
        ];
        for input in inputs {
            let once = clean_pasted_text(input);
            assert_eq!(clean_pasted_text(&once), once);
        }
    }
}
