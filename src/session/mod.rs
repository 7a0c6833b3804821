//! A single game of Wordle
//!
//! [`GameSession`] owns the secret, the verdict history and the keyboard knowledge snapshot.
//! The secret comes from a [`SecretSource`], asked lazily on the first submission with the
//! constraints compiled from whatever has been played so far.

use crate::config::Language;
use crate::core::{ConstraintSet, LetterKnowledge, MAX_ATTEMPTS, Verdict, Word, WordError};
use crate::stats::GameRecord;
use thiserror::Error;

/// Errors raised by a secret source
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("no word satisfies the current constraints")]
    NoCandidates,

    #[error("secret source unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised when submitting a guess
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("'{0}' is not in the word list")]
    NotInWordList(String),

    #[error(transparent)]
    Secret(#[from] SecretError),
}

/// Supplies the secret word and judges which guesses are allowed
pub trait SecretSource {
    /// Pick a secret consistent with `constraints`
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be chosen.
    fn choose_secret(&mut self, constraints: &ConstraintSet) -> Result<Word, SecretError>;

    /// Whether `word` may be played
    fn is_allowed(&self, _word: &Word) -> bool {
        true
    }
}

/// A source that always answers with the same word
#[derive(Debug, Clone)]
pub struct FixedSecret(pub Word);

impl SecretSource for FixedSecret {
    fn choose_secret(&mut self, _constraints: &ConstraintSet) -> Result<Word, SecretError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Option<Word>,
    history: Vec<Verdict>,
    knowledge: LetterKnowledge,
    status: GameStatus,
    max_attempts: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS)
    }
}

impl GameSession {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            secret: None,
            history: Vec::new(),
            knowledge: LetterKnowledge::default(),
            status: GameStatus::InProgress,
            max_attempts,
        }
    }

    /// Start with a known secret instead of asking a source for one
    #[must_use]
    pub fn with_secret(mut self, secret: Word) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Score `guess` without playing it
    #[must_use]
    pub fn preview(&self, guess: &Word) -> Verdict {
        Verdict::score(guess, self.secret.as_ref())
    }

    /// Play one guess
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the input is not a valid word, the source rejects
    /// the word, or no secret can be obtained.
    pub fn submit(
        &mut self,
        input: &str,
        source: &mut impl SecretSource,
    ) -> Result<&Verdict, SessionError> {
        if self.status.is_over() {
            return Err(SessionError::GameOver);
        }

        let guess = Word::new(input)?;
        if !source.is_allowed(&guess) {
            return Err(SessionError::NotInWordList(guess.text().to_string()));
        }

        let secret = match &self.secret {
            Some(secret) => secret.clone(),
            None => {
                let secret = source.choose_secret(&self.constraints())?;
                tracing::debug!(attempt = self.history.len() + 1, "secret chosen");
                self.secret = Some(secret.clone());
                secret
            }
        };

        let verdict = Verdict::score(&guess, Some(&secret));
        self.knowledge = self.knowledge.fold(&verdict);
        self.history.push(verdict);
        self.status = self.derive_status();

        tracing::debug!(
            guess = %guess,
            attempt = self.history.len(),
            status = ?self.status,
            "guess submitted"
        );

        Ok(&self.history[self.history.len() - 1])
    }

    /// Take back the last guess
    ///
    /// Returns the removed verdict, or `None` when there is nothing to undo. A finished game
    /// cannot be undone; its record may already be stored.
    pub fn undo(&mut self) -> Option<Verdict> {
        if self.status.is_over() {
            return None;
        }
        let removed = self.history.pop()?;
        self.knowledge = LetterKnowledge::from_history(&self.history);
        self.status = self.derive_status();
        tracing::debug!(remaining = self.history.len(), "guess undone");
        Some(removed)
    }

    /// Forget the secret and the history
    pub fn new_game(&mut self) {
        self.secret = None;
        self.history.clear();
        self.knowledge = LetterKnowledge::default();
        self.status = GameStatus::InProgress;
    }

    /// Constraint payload compiled from the full history
    #[must_use]
    pub fn constraints(&self) -> ConstraintSet {
        ConstraintSet::compile(&self.history)
    }

    #[must_use]
    pub const fn knowledge(&self) -> &LetterKnowledge {
        &self.knowledge
    }

    #[must_use]
    pub fn history(&self) -> &[Verdict] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    /// The record of a finished game, `None` while it is in progress
    #[must_use]
    pub fn record(&self, language: Language) -> Option<GameRecord> {
        self.status
            .is_over()
            .then(|| GameRecord::new(self.attempts(), self.status == GameStatus::Won, language))
    }

    fn derive_status(&self) -> GameStatus {
        match self.history.last() {
            Some(last) if last.is_solved() => GameStatus::Won,
            _ if self.history.len() >= self.max_attempts => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }
}
