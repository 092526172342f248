//! Core library for the examcards teacher/student flashcard product.
//!
//! Provides:
//! - AI-response-to-flashcard extraction: JSON, markdown table, numbered
//!   list, and inline Q/A detection, with heuristic repair of truncated or
//!   sloppy JSON
//! - A final validation gate for candidate decks
//! - Fuzzy answer matching for the typed-recall and arcade study modes
//! - Static prompt-wizard configuration and prompt templates
//!
//! Everything here is pure and synchronous: identical inputs give
//! bit-identical outputs, with no I/O, no shared mutable state, and no
//! coordination needed between concurrent callers. Transport, persistence,
//! auth, and rendering live in the embedding application.

pub mod error;
pub mod extract;
pub mod matching;
pub mod prompt;
pub mod types;
pub mod validate;

pub use error::{ExtractError, Result, ValidateError};
pub use extract::{clean_pasted_text, extract_cards};
pub use matching::{levenshtein_distance, match_answer};
pub use prompt::{
    accessibility_requirements, generate_notebook_prompt, generate_prompt, prompt_step,
    PromptInput, PromptStep, PROMPT_STEPS,
};
pub use types::{Card, MatchResult, ParseFormat, ParseResult};
pub use validate::validate_cards;
