//! Wordle Feedback
//!
//! Scores Wordle guesses, folds the results into keyboard knowledge and compiles the guess
//! history into the `green`/`yellow`/`grey` payload a solver consumes.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_feedback::core::{ConstraintSet, LetterState, Verdict, Word};
//!
//! let guess = Word::new("roomy").unwrap();
//! let secret = Word::new("robot").unwrap();
//!
//! let verdict = Verdict::score(&guess, Some(&secret));
//! assert_eq!(verdict.states()[2], LetterState::Present);
//!
//! let payload = ConstraintSet::compile(&[verdict]).to_json().unwrap();
//! assert_eq!(
//!     payload,
//!     r#"{"green":{"0":"r","1":"o"},"yellow":{"2":["o"]},"grey":["m","y"]}"#
//! );
//! ```

// Core domain types
pub mod core;

// Game state
pub mod session;

// Dictionary-backed solver
pub mod solver;

// Persisted statistics
pub mod stats;

// Word lists
pub mod wordlists;

// Runtime settings and tracing setup
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
