//! Fuzzy answer matching for the typed-recall and arcade study modes.

use crate::types::MatchResult;

/// References shorter than this are accepted when fully contained in the
/// typed answer. Longer references skip the containment rule so long text
/// cannot be "contained" by accident.
const CONTAINMENT_MAX_REF_CHARS: usize = 50;
const CONTAINMENT_SCORE: f64 = 0.95;

/// Decide whether a free-typed answer matches the reference answer.
///
/// Rules are applied in order, short-circuiting on the first hit:
/// 1. normalized equality -> score 1.0
/// 2. short reference contained in the typed answer -> score 0.95
/// 3. edit-distance similarity against the caller's threshold
///
/// Only lexical closeness is modeled; there is no stemming or synonym
/// handling. Never fails: a decision always comes back.
pub fn match_answer(user: &str, reference: &str, threshold: f64) -> MatchResult {
    let user_norm = normalize(user);
    let reference_norm = normalize(reference);

    if user_norm == reference_norm {
        return MatchResult {
            is_match: true,
            score: 1.0,
        };
    }

    if reference_norm.chars().count() < CONTAINMENT_MAX_REF_CHARS
        && user_norm.contains(&reference_norm)
    {
        return MatchResult {
            is_match: true,
            score: CONTAINMENT_SCORE,
        };
    }

    let distance = levenshtein_distance(&user_norm, &reference_norm);
    let max_len = user_norm
        .chars()
        .count()
        .max(reference_norm.chars().count())
        .max(1);
    let score = 1.0 - distance as f64 / max_len as f64;

    MatchResult {
        is_match: score >= threshold,
        score,
    }
}

/// Lowercase, strip everything that is not a letter, digit, or whitespace,
/// and collapse whitespace runs to single spaces.
fn normalize(s: &str) -> String {
    let stripped: String = s
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classic Levenshtein distance (insert/delete/substitute, unit cost) over
/// chars, using two rows instead of the full matrix.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
