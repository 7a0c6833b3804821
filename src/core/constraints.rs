//! Constraint compilation for the external solver
//!
//! The whole guess history is folded into three parts, recomputed from scratch on every call:
//! - `green`: position → letter confirmed at that position
//! - `yellow`: position → letters known to be present but not at that position
//! - `grey`: letters known to be absent from the secret
//!
//! A letter only becomes grey if it was never confirmed or present anywhere in the history. A
//! duplicate letter can be absent at one position and present at another, and a single absent
//! cell must not blacklist a letter the secret contains.

use super::{LetterState, Verdict, Word};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compiled summary of all guesses, in the shape the solver API parses
///
/// Serializes as `{"green":{"0":"r"},"yellow":{"2":["o"]},"grey":["m","y"]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Confirmed letters by zero-based position
    pub green: BTreeMap<usize, char>,
    /// Letters present but excluded from each zero-based position, in first-seen order
    pub yellow: BTreeMap<usize, Vec<char>>,
    /// Letters absent from the secret, in first-seen order
    pub grey: Vec<char>,
}

impl ConstraintSet {
    /// Compile the full, ordered guess history
    ///
    /// Pending rows (no secret yet) contribute nothing.
    ///
    /// # Examples
    /// ```
    /// use wordle_feedback::core::{ConstraintSet, Verdict, Word};
    ///
    /// let secret = Word::new("robot").unwrap();
    /// let history = [Verdict::score(&Word::new("roomy").unwrap(), Some(&secret))];
    /// let constraints = ConstraintSet::compile(&history);
    ///
    /// assert_eq!(constraints.green.get(&0), Some(&'r'));
    /// assert_eq!(constraints.green.get(&1), Some(&'o'));
    /// assert_eq!(constraints.yellow.get(&2), Some(&vec!['o']));
    /// assert_eq!(constraints.grey, vec!['m', 'y']);
    /// ```
    #[must_use]
    pub fn compile(history: &[Verdict]) -> Self {
        let mut constraints = Self::default();
        let mut ever_confirmed: FxHashSet<char> = FxHashSet::default();
        let mut ever_present: FxHashSet<char> = FxHashSet::default();
        let mut grey_candidates: Vec<char> = Vec::new();

        for verdict in history {
            for (position, letter, state) in verdict.cells() {
                let letter = char::from(letter);
                match state {
                    LetterState::Correct => {
                        constraints.green.insert(position, letter);
                        ever_confirmed.insert(letter);
                    }
                    LetterState::Present => {
                        let excluded = constraints.yellow.entry(position).or_default();
                        if !excluded.contains(&letter) {
                            excluded.push(letter);
                        }
                        ever_present.insert(letter);
                    }
                    LetterState::Absent => {
                        if !grey_candidates.contains(&letter) {
                            grey_candidates.push(letter);
                        }
                    }
                    LetterState::Empty => {}
                }
            }
        }

        constraints.grey = grey_candidates
            .into_iter()
            .filter(|letter| !ever_confirmed.contains(letter) && !ever_present.contains(letter))
            .collect();

        constraints
    }

    /// True when no guess has contributed anything yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_empty() && self.yellow.is_empty() && self.grey.is_empty()
    }

    /// Check whether `word` is consistent with these constraints
    ///
    /// Every green letter must sit at its position, every yellow letter must occur in the word
    /// but not at the position it was excluded from, and no grey letter may occur.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let at = |position: usize| word.chars().get(position).map(|&b| char::from(b));

        self.green
            .iter()
            .all(|(&position, &letter)| at(position) == Some(letter))
            && self.yellow.iter().all(|(&position, letters)| {
                letters.iter().all(|&letter| {
                    at(position) != Some(letter) && word.text().contains(letter)
                })
            })
            && !self.grey.iter().any(|&letter| word.text().contains(letter))
    }

    /// Serialize to the solver's JSON payload
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse a solver JSON payload
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid payload.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(guess: &str, secret: &str) -> Verdict {
        Verdict::score(&Word::new(guess).unwrap(), Some(&Word::new(secret).unwrap()))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn compile_empty_history() {
        let constraints = ConstraintSet::compile(&[]);
        assert!(constraints.is_empty());
        assert_eq!(constraints, ConstraintSet::default());
    }

    #[test]
    fn compile_single_guess() {
        let constraints = ConstraintSet::compile(&[scored("roomy", "robot")]);

        assert_eq!(constraints.green, BTreeMap::from([(0, 'r'), (1, 'o')]));
        assert_eq!(constraints.yellow, BTreeMap::from([(2, vec!['o'])]));
        assert_eq!(constraints.grey, vec!['m', 'y']);
    }

    #[test]
    fn absent_then_present_is_not_grey() {
        // Guess 1: E absent everywhere. Guess 2: E present at 3.
        let history = [scored("eerie", "robot"), scored("paper", "apple")];
        let constraints = ConstraintSet::compile(&history);

        assert!(!constraints.grey.contains(&'e'));
        assert_eq!(constraints.yellow.get(&3), Some(&vec!['e']));
        // R was present in guess 1 and absent in guess 2; only I stays grey
        assert_eq!(constraints.grey, vec!['i']);
    }

    #[test]
    fn present_then_absent_is_not_grey() {
        let history = [scored("paper", "apple"), scored("eeeee", "robot")];
        let constraints = ConstraintSet::compile(&history);

        assert!(!constraints.grey.contains(&'e'));
    }

    #[test]
    fn duplicate_absent_within_one_guess_is_not_grey() {
        // "ooooo" vs "robot": O correct at 1 and 3, absent elsewhere
        let constraints = ConstraintSet::compile(&[scored("ooooo", "robot")]);

        assert!(constraints.grey.is_empty());
        assert_eq!(constraints.green, BTreeMap::from([(1, 'o'), (3, 'o')]));
    }

    #[test]
    fn yellow_is_deduplicated_per_position() {
        let history = [scored("roomy", "robot"), scored("roomy", "robot")];
        let constraints = ConstraintSet::compile(&history);

        assert_eq!(constraints.yellow.get(&2), Some(&vec!['o']));
        assert_eq!(constraints.grey, vec!['m', 'y']);
    }

    #[test]
    fn pending_rows_are_ignored() {
        let pending = Verdict::score(&word("hello"), None);
        let constraints = ConstraintSet::compile(&[pending]);
        assert!(constraints.is_empty());
    }

    #[test]
    fn compile_is_idempotent() {
        let history = [scored("crane", "robot"), scored("roomy", "robot")];
        assert_eq!(
            ConstraintSet::compile(&history),
            ConstraintSet::compile(&history)
        );
    }

    #[test]
    fn json_payload_shape() {
        let constraints = ConstraintSet::compile(&[scored("roomy", "robot")]);
        let json = constraints.to_json().unwrap();

        assert_eq!(
            json,
            r#"{"green":{"0":"r","1":"o"},"yellow":{"2":["o"]},"grey":["m","y"]}"#
        );
        assert_eq!(ConstraintSet::from_json(&json).unwrap(), constraints);
    }

    #[test]
    fn admits_secret() {
        let history = [scored("crane", "robot"), scored("roomy", "robot")];
        let constraints = ConstraintSet::compile(&history);

        assert!(constraints.admits(&word("robot")));
    }

    #[test]
    fn admits_rejects_inconsistent_words() {
        let constraints = ConstraintSet::compile(&[scored("roomy", "robot")]);

        // Wrong green
        assert!(!constraints.admits(&word("boots")));
        // Yellow letter at its excluded position
        assert!(!constraints.admits(&word("rooks")));
        // Grey letter present
        assert!(!constraints.admits(&word("robom")));
        // Consistent
        assert!(constraints.admits(&word("robot")));
        assert!(constraints.admits(&word("rotor")));
    }

    #[test]
    fn admits_everything_when_empty() {
        let constraints = ConstraintSet::default();
        assert!(constraints.admits(&word("zzzzz")));
    }
}
