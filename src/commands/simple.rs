//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. The secret comes from the local solver once the first guess
//! is in; finished games are appended to the stats store.

use crate::config::Language;
use crate::core::WORD_LENGTH;
use crate::output::display::{format_constraints, format_keyboard, format_verdict};
use crate::output::formatters::plural_guesses;
use crate::session::{GameSession, GameStatus, SessionError};
use crate::solver::LocalSolver;
use crate::stats::StatsStore;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(
    solver: &mut LocalSolver,
    store: &mut impl StatsStore,
    language: Language,
    max_attempts: usize,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(
        stdin.lock(),
        stdout.lock(),
        solver,
        store,
        language,
        max_attempts,
    )
}

/// Drive a game from `input` lines, writing everything to `out`
///
/// Commands: `quit`, `new`, `undo`, `hint`, `constraints`. Anything else is a guess.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn play_lines<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    solver: &mut LocalSolver,
    store: &mut impl StatsStore,
    language: Language,
    max_attempts: usize,
) -> Result<()> {
    writeln!(
        out,
        "Wordle ({language}): guess the {WORD_LENGTH}-letter word in {max_attempts} tries."
    )
    .context("failed to write output")?;
    writeln!(
        out,
        "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess, 'hint' for a suggestion\n"
    )?;

    let mut session = GameSession::new(max_attempts);

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.new_game();
                writeln!(out, "New game started!")?;
            }
            "undo" | "u" => {
                if session.undo().is_some() {
                    writeln!(out, "Undone! Back to turn {}", session.attempts() + 1)?;
                } else {
                    writeln!(out, "Nothing to undo!")?;
                }
            }
            "hint" | "h" => {
                let guessed: Vec<_> = session
                    .history()
                    .iter()
                    .map(|v| v.guess().clone())
                    .collect();
                match solver.suggest(&session.constraints(), &guessed) {
                    Some(word) => writeln!(out, "Try: {}", word.text().to_uppercase())?,
                    None => writeln!(out, "No suggestion available")?,
                }
            }
            "constraints" | "c" => {
                writeln!(out, "{}", format_constraints(&session.constraints()))?;
            }
            guess => {
                let row = match session.submit(guess, solver) {
                    Ok(verdict) => format_verdict(verdict),
                    Err(SessionError::GameOver) => {
                        writeln!(out, "The game is over; type 'new'")?;
                        continue;
                    }
                    Err(err) => {
                        writeln!(out, "Invalid guess: {err}")?;
                        continue;
                    }
                };

                writeln!(out, "{row}")?;
                writeln!(out, "{}", format_keyboard(session.knowledge(), language))?;
                if session.status().is_over() {
                    finish_game(&mut out, &session, store, language)?;
                    session.new_game();
                    writeln!(out, "\nNew game started!")?;
                }
            }
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(())
}

fn finish_game<W: Write>(
    out: &mut W,
    session: &GameSession,
    store: &mut impl StatsStore,
    language: Language,
) -> Result<()> {
    match session.status() {
        GameStatus::Won => writeln!(out, "Solved in {}!", plural_guesses(session.attempts()))?,
        GameStatus::Lost => {
            let secret = session.secret().map_or_else(String::new, |s| s.text().to_uppercase());
            writeln!(out, "Out of guesses! The word was {secret}")?;
        }
        GameStatus::InProgress => return Ok(()),
    }

    if let Some(record) = session.record(language)
        && let Err(err) = store.append(record)
    {
        tracing::warn!(%err, "could not save game record");
        writeln!(out, "Could not save statistics: {err}")?;
    }
    Ok(())
}
