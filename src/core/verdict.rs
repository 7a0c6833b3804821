//! Guess scoring and per-position verdicts
//!
//! A verdict pairs a guessed word with one [`LetterState`] per position:
//! - Correct: letter matches the secret at this position
//! - Present: letter occurs elsewhere in the secret, within its remaining supply
//! - Absent: letter does not occur, or all its occurrences were claimed
//! - Empty: no secret is known yet, so nothing was scored

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Outcome for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Empty,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Whether this state carries information about the secret
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty => '⬛',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback must have exactly {WORD_LENGTH} symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback symbol '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidSymbol(char),
}

/// A guess together with its per-position outcome
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verdict {
    guess: Word,
    states: [LetterState; WORD_LENGTH],
}

impl Verdict {
    /// Score `guess` against `secret`
    ///
    /// With no secret every position is [`LetterState::Empty`], which lets a caller show a guess
    /// before the secret has been assigned.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the secret's letter pool
    /// 2. Second pass: mark remaining positions Present while the pool still holds that letter,
    ///    otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_feedback::core::{LetterState, Verdict, Word};
    ///
    /// let guess = Word::new("roomy").unwrap();
    /// let secret = Word::new("robot").unwrap();
    /// let verdict = Verdict::score(&guess, Some(&secret));
    ///
    /// assert_eq!(
    ///     verdict.states(),
    ///     &[
    ///         LetterState::Correct,
    ///         LetterState::Correct,
    ///         LetterState::Present,
    ///         LetterState::Absent,
    ///         LetterState::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: Option<&Word>) -> Self {
        let Some(secret) = secret else {
            return Self::pending(guess.clone());
        };

        let mut states = [LetterState::Absent; WORD_LENGTH];
        let mut remaining = secret.char_counts();

        // Allow: Index needed to access guess[i], secret[i], and set states[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                states[i] = LetterState::Correct;
                if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if states[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                states[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self {
            guess: guess.clone(),
            states,
        }
    }

    /// A row for `guess` with no scoring information
    #[must_use]
    pub fn pending(guess: Word) -> Self {
        Self {
            guess,
            states: [LetterState::Empty; WORD_LENGTH],
        }
    }

    /// Build a verdict from feedback reported by someone who knows the secret
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for present and '-'/'_'/'.'/⬜ for absent.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the feedback does not have exactly `WORD_LENGTH` valid symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_feedback::core::{Verdict, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let v1 = Verdict::from_feedback(guess.clone(), "GY-GY").unwrap();
    /// let v2 = Verdict::from_feedback(guess, "🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(v1, v2);
    /// ```
    pub fn from_feedback(guess: Word, feedback: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = feedback.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(symbols.len()));
        }

        let mut states = [LetterState::Empty; WORD_LENGTH];
        for (state, &symbol) in states.iter_mut().zip(&symbols) {
            *state = LetterState::from_symbol(symbol).ok_or(FeedbackError::InvalidSymbol(symbol))?;
        }

        Ok(Self { guess, states })
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Per-position states, in guess order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.states
    }

    /// Iterate over `(position, letter, state)` triples
    pub fn cells(&self) -> impl Iterator<Item = (usize, u8, LetterState)> + '_ {
        self.guess
            .chars()
            .iter()
            .zip(self.states)
            .enumerate()
            .map(|(position, (&letter, state))| (position, letter, state))
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.states.iter().all(|&s| s == LetterState::Correct)
    }

    /// True when the row was produced without a secret
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.states.iter().all(|&s| s == LetterState::Empty)
    }

    /// Number of Correct or Present cells for `letter`
    #[must_use]
    pub fn matched_count(&self, letter: u8) -> usize {
        self.cells()
            .filter(|&(_, l, s)| {
                l == letter && matches!(s, LetterState::Correct | LetterState::Present)
            })
            .count()
    }

    /// Render the row as emoji tiles, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.states.iter().map(|s| s.emoji()).collect()
    }
}
