//! Display functions for command results

use super::formatters::{create_progress_bar, keyboard_rows, plural_guesses};
use crate::commands::BenchmarkResult;
use crate::config::Language;
use crate::core::{
    ConstraintSet, KeyState, LetterKnowledge, LetterState, MAX_ATTEMPTS, Verdict, Word,
};
use crate::stats::StatsSummary;
use colored::{ColoredString, Colorize};

fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Empty => text.white().bold(),
    }
}

fn key(letter: char, state: KeyState) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match state {
        KeyState::Correct => text.green().bold(),
        KeyState::Present => text.yellow().bold(),
        KeyState::Absent => text.bright_black(),
        KeyState::Unknown => text.white(),
    }
}

/// One verdict as a row of coloured tiles followed by its emoji
#[must_use]
pub fn format_verdict(verdict: &Verdict) -> String {
    let tiles: String = verdict
        .cells()
        .map(|(_, letter, state)| tile(char::from(letter), state).to_string())
        .collect();
    format!("{tiles}  {}", verdict.to_emoji())
}

/// The keyboard, each key coloured by what is known about its letter
#[must_use]
pub fn format_keyboard(knowledge: &LetterKnowledge, language: Language) -> String {
    keyboard_rows(language)
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|b| key(char::from(b), knowledge.state(b)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The solver payload, one coloured line per category
#[must_use]
pub fn format_constraints(constraints: &ConstraintSet) -> String {
    let green: Vec<String> = constraints
        .green
        .iter()
        .map(|(position, letter)| format!("{}={letter}", position + 1))
        .collect();
    let yellow: Vec<String> = constraints
        .yellow
        .iter()
        .map(|(position, letters)| {
            let letters: String = letters.iter().collect();
            format!("{}!={letters}", position + 1)
        })
        .collect();
    let grey: String = constraints.grey.iter().collect();

    format!(
        "{}  {}\n{} {}\n{}   {}",
        "green".green().bold(),
        green.join(" "),
        "yellow".yellow().bold(),
        yellow.join(" "),
        "grey".bright_black().bold(),
        grey
    )
}

/// Print a scored guess
pub fn print_verdict(verdict: &Verdict) {
    println!("{}", format_verdict(verdict));
}

/// Print the JSON payload
pub fn print_constraints_json(json: &str) {
    println!("{json}");
}

/// Print the admissible words
pub fn print_candidates(listed: &[Word], total: usize) {
    println!(
        "{} {}",
        total.to_string().bright_yellow().bold(),
        if total == 1 { "candidate" } else { "candidates" }
    );
    for word in listed {
        println!("  • {}", word.text().to_uppercase());
    }
    if listed.len() < total {
        println!("  … and {} more", total - listed.len());
    }
}

/// Print the persisted statistics
pub fn print_stats_summary(summary: &StatsSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Played:           {}", summary.played);
    println!(
        "   Win rate:         {}",
        format!("{:.0}%", summary.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:   {}", summary.current_streak);
    println!("   Best streak:      {}", summary.best_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = summary.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in summary.distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 40);
        println!("   {}: {} {count:4}", i + 1, bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        plural_guesses(result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        plural_guesses(result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failed.is_empty() {
        println!("\n❌ {}", "Not solved:".red().bold());
        for word in result.failed.iter().take(10) {
            println!("   {}", word.to_uppercase());
        }
    }
}
