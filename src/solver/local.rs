//! Word-list backed secret source
//!
//! Stands in for an external solver: it filters its dictionary with the compiled constraint
//! payload and answers from what remains.

use crate::core::{ConstraintSet, Word};
use crate::session::{SecretError, SecretSource};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// A solver over a fixed dictionary
#[derive(Debug, Clone)]
pub struct LocalSolver {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl LocalSolver {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let lookup = words.iter().map(|w| w.text().to_string()).collect();
        Self { words, lookup }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every dictionary word the constraints admit, in dictionary order
    #[must_use]
    pub fn candidates(&self, constraints: &ConstraintSet) -> Vec<&Word> {
        self.words
            .par_iter()
            .filter(|word| constraints.admits(word))
            .collect()
    }

    /// First admissible word not already guessed
    ///
    /// # Examples
    /// ```
    /// use wordle_feedback::core::{ConstraintSet, Verdict, Word};
    /// use wordle_feedback::solver::LocalSolver;
    ///
    /// let words: Vec<Word> = ["apple", "robot", "rotor"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let solver = LocalSolver::new(words);
    ///
    /// let guess = Word::new("roomy").unwrap();
    /// let secret = Word::new("robot").unwrap();
    /// let history = vec![Verdict::score(&guess, Some(&secret))];
    /// let constraints = ConstraintSet::compile(&history);
    ///
    /// assert_eq!(solver.suggest(&constraints, &[guess]).unwrap().text(), "robot");
    /// ```
    #[must_use]
    pub fn suggest(&self, constraints: &ConstraintSet, guessed: &[Word]) -> Option<&Word> {
        self.words
            .iter()
            .find(|word| !guessed.contains(word) && constraints.admits(word))
    }
}

impl SecretSource for LocalSolver {
    fn choose_secret(&mut self, constraints: &ConstraintSet) -> Result<Word, SecretError> {
        use rand::prelude::IndexedRandom;

        let candidates = self.candidates(constraints);
        tracing::debug!(candidates = candidates.len(), "choosing secret");

        candidates
            .choose(&mut rand::rng())
            .map(|&word| word.clone())
            .ok_or(SecretError::NoCandidates)
    }

    fn is_allowed(&self, word: &Word) -> bool {
        self.lookup.contains(word.text())
    }
}
