//! Cumulative per-letter knowledge for keyboard highlighting
//!
//! Each letter carries the strongest state observed for it anywhere in the game, under the
//! total order `Unknown < Absent < Present < Correct`. Folding a verdict never lowers a state,
//! so a letter that is absent at one position but present elsewhere keeps the stronger signal.

use super::{LetterState, Verdict};

const ALPHABET_LEN: usize = 26;

/// Best-known state of one letter across a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum KeyState {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl KeyState {
    /// Map a scored position onto the key ordering; `Empty` carries no information
    #[must_use]
    pub const fn observed(state: LetterState) -> Option<Self> {
        match state {
            LetterState::Empty => None,
            LetterState::Absent => Some(Self::Absent),
            LetterState::Present => Some(Self::Present),
            LetterState::Correct => Some(Self::Correct),
        }
    }
}

/// Snapshot of every letter's best-known state
///
/// A plain value: [`LetterKnowledge::fold`] returns a new snapshot and leaves `self` untouched,
/// so earlier snapshots stay valid for undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterKnowledge {
    states: [KeyState; ALPHABET_LEN],
}

impl LetterKnowledge {
    /// Fold one verdict into this knowledge, returning the updated snapshot
    ///
    /// # Examples
    /// ```
    /// use wordle_feedback::core::{KeyState, LetterKnowledge, Verdict, Word};
    ///
    /// let secret = Word::new("robot").unwrap();
    /// let verdict = Verdict::score(&Word::new("roomy").unwrap(), Some(&secret));
    /// let knowledge = LetterKnowledge::default().fold(&verdict);
    ///
    /// assert_eq!(knowledge.state(b'o'), KeyState::Correct);
    /// assert_eq!(knowledge.state(b'm'), KeyState::Absent);
    /// assert_eq!(knowledge.state(b'z'), KeyState::Unknown);
    /// ```
    #[must_use]
    pub fn fold(&self, verdict: &Verdict) -> Self {
        let mut next = *self;
        for (_, letter, state) in verdict.cells() {
            let (Some(slot), Some(observed)) = (index_of(letter), KeyState::observed(state)) else {
                continue;
            };
            next.states[slot] = next.states[slot].max(observed);
        }
        next
    }

    /// Fold a whole history from an empty snapshot
    #[must_use]
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a Verdict>) -> Self {
        history
            .into_iter()
            .fold(Self::default(), |knowledge, verdict| knowledge.fold(verdict))
    }

    /// State of `letter` (either case); non-letters are always `Unknown`
    #[must_use]
    pub fn state(&self, letter: u8) -> KeyState {
        index_of(letter.to_ascii_lowercase()).map_or(KeyState::Unknown, |slot| self.states[slot])
    }

    /// Letters that have reached `state`, in alphabetical order
    pub fn letters_in(&self, state: KeyState) -> impl Iterator<Item = char> + '_ {
        (b'a'..=b'z')
            .zip(self.states)
            .filter(move |&(_, s)| s == state)
            .map(|(letter, _)| char::from(letter))
    }

    /// True when no letter has been observed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.iter().all(|&s| s == KeyState::Unknown)
    }
}

fn index_of(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn scored(guess: &str, secret: &str) -> Verdict {
        Verdict::score(&Word::new(guess).unwrap(), Some(&Word::new(secret).unwrap()))
    }

    #[test]
    fn empty_knowledge_is_unknown() {
        let knowledge = LetterKnowledge::default();
        assert!(knowledge.is_empty());
        assert_eq!(knowledge.state(b'a'), KeyState::Unknown);
        assert_eq!(knowledge.state(b'?'), KeyState::Unknown);
    }

    #[test]
    fn fold_does_not_mutate_input() {
        let before = LetterKnowledge::default();
        let after = before.fold(&scored("roomy", "robot"));

        assert!(before.is_empty());
        assert!(!after.is_empty());
    }

    #[test]
    fn absent_never_overwrites_present() {
        // "paper" vs "apple": E present
        let knowledge = LetterKnowledge::default().fold(&scored("paper", "apple"));
        assert_eq!(knowledge.state(b'e'), KeyState::Present);

        // "there" vs "apple": first E is absent, last E correct
        let knowledge = knowledge.fold(&scored("there", "apple"));
        assert_eq!(knowledge.state(b'e'), KeyState::Correct);

        // A later guess where E is absent leaves it Correct
        let knowledge = knowledge.fold(&scored("eeeee", "robot"));
        assert_eq!(knowledge.state(b'e'), KeyState::Correct);
    }

    #[test]
    fn same_word_absent_and_present_keeps_stronger() {
        // "ooooo" vs "robot": O is correct twice and absent three times
        let knowledge = LetterKnowledge::default().fold(&scored("ooooo", "robot"));
        assert_eq!(knowledge.state(b'o'), KeyState::Correct);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let knowledge = LetterKnowledge::default().fold(&scored("paper", "apple"));
        assert_eq!(knowledge.state(b'a'), KeyState::Present);

        let knowledge = knowledge.fold(&scored("apple", "apple"));
        assert_eq!(knowledge.state(b'a'), KeyState::Correct);
    }

    #[test]
    fn pending_rows_are_ignored() {
        let pending = Verdict::score(&Word::new("hello").unwrap(), None);
        let knowledge = LetterKnowledge::default().fold(&pending);
        assert!(knowledge.is_empty());
    }

    #[test]
    fn from_history_matches_incremental_fold() {
        let history = vec![
            scored("crane", "robot"),
            scored("roomy", "robot"),
            scored("robot", "robot"),
        ];

        let mut incremental = LetterKnowledge::default();
        for verdict in &history {
            incremental = incremental.fold(verdict);
        }

        assert_eq!(LetterKnowledge::from_history(&history), incremental);
    }

    #[test]
    fn letters_in_lists_alphabetically() {
        let knowledge = LetterKnowledge::default().fold(&scored("roomy", "robot"));
        let absent: String = knowledge.letters_in(KeyState::Absent).collect();
        let correct: String = knowledge.letters_in(KeyState::Correct).collect();

        assert_eq!(absent, "my");
        assert_eq!(correct, "or");
    }

    #[test]
    fn state_accepts_uppercase() {
        let knowledge = LetterKnowledge::default().fold(&scored("roomy", "robot"));
        assert_eq!(knowledge.state(b'R'), KeyState::Correct);
    }
}
