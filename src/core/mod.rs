//! Core domain types for Wordle feedback
//!
//! Scoring, keyboard knowledge and constraint compilation. Everything here is a pure function
//! over immutable values; callers own and thread the state.

mod constraints;
mod knowledge;
mod verdict;
mod word;

pub use constraints::ConstraintSet;
pub use knowledge::{KeyState, LetterKnowledge};
pub use verdict::{FeedbackError, LetterState, Verdict};
pub use word::{Word, WordError};

/// Number of letters in every guess and secret
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
