//! Benchmark command
//!
//! Plays full games of the local solver against itself across a word list.

use crate::core::Word;
use crate::session::{FixedSecret, GameSession, GameStatus};
use crate::solver::LocalSolver;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Wins by number of guesses
    pub distribution: HashMap<usize, usize>,
    pub failed: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play one game where the solver guesses `target`
///
/// Returns the finished session.
#[must_use]
pub fn play_one(solver: &LocalSolver, target: &Word, max_attempts: usize) -> GameSession {
    let mut session = GameSession::new(max_attempts).with_secret(target.clone());
    let mut source = FixedSecret(target.clone());

    while !session.status().is_over() {
        let guessed: Vec<Word> = session
            .history()
            .iter()
            .map(|verdict| verdict.guess().clone())
            .collect();

        let Some(guess) = solver.suggest(&session.constraints(), &guessed) else {
            tracing::warn!(target = %target, "solver ran out of candidates");
            break;
        };

        if let Err(err) = session.submit(guess.text(), &mut source) {
            tracing::warn!(target = %target, %err, "benchmark guess rejected");
            break;
        }
    }

    session
}

/// Run the benchmark on a set of target words
pub fn run_benchmark(
    solver: &LocalSolver,
    target_words: &[Word],
    max_attempts: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failed = Vec::new();

    for target in target_words {
        let session = play_one(solver, target, max_attempts);
        let guesses = session.attempts();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);

        if session.status() == GameStatus::Won {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed.push(target.text().to_string());
        }

        pb.set_message(target.text().to_string());
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = target_words.len();
    if total_words == 0 {
        min_guesses = 0;
    }

    tracing::info!(
        words = total_words,
        solved,
        elapsed_ms = duration.as_millis(),
        "benchmark finished"
    );

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses,
        max_guesses,
        distribution,
        failed,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;
    use crate::wordlists::WORDS_EN;
    use crate::wordlists::loader::words_from_slice;

    fn solver() -> LocalSolver {
        LocalSolver::new(words_from_slice(WORDS_EN))
    }

    #[test]
    fn play_one_never_repeats_a_guess() {
        let solver = solver();
        let target = Word::new("robot").unwrap();
        let session = play_one(&solver, &target, MAX_ATTEMPTS);

        let guesses: Vec<&str> = session.history().iter().map(|v| v.guess().text()).collect();
        let unique: std::collections::HashSet<_> = guesses.iter().collect();
        assert_eq!(unique.len(), guesses.len());
        assert!(session.status().is_over());
    }

    #[test]
    fn play_one_with_unlimited_attempts_always_wins() {
        let solver = solver();
        for target in solver.words().iter().step_by(37) {
            let session = play_one(&solver, target, usize::MAX);
            assert_eq!(session.status(), GameStatus::Won, "target {target}");
        }
    }

    #[test]
    fn benchmark_runs() {
        let solver = solver();
        let targets = words_from_slice(&WORDS_EN[..10]);
        let result = run_benchmark(&solver, &targets, MAX_ATTEMPTS, false);

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved + result.failed.len(), 10);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_ATTEMPTS);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let solver = solver();
        let targets = words_from_slice(&WORDS_EN[..10]);
        let result = run_benchmark(&solver, &targets, MAX_ATTEMPTS, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_ATTEMPTS).contains(&guess_count));
        }
    }

    #[test]
    fn benchmark_empty_word_list() {
        let result = run_benchmark(&solver(), &[], MAX_ATTEMPTS, false);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }
}
