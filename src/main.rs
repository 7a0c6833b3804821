//! Wordle Feedback - CLI
//!
//! Play Wordle in a TUI or on the command line, score guesses and print the solver payload.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_feedback::{
    commands::{
        compile_entries, list_candidates, run_benchmark, run_simple, score_guess, summarize,
    },
    config::{DEFAULT_STATS_PATH, Language, Settings},
    core::Word,
    logging::{LogTarget, init_tracing},
    output::{
        print_benchmark_result, print_candidates, print_constraints_json, print_stats_summary,
        print_verdict,
    },
    solver::LocalSolver,
    stats::JsonFileStore,
    wordlists::loader,
};

#[derive(Parser)]
#[command(
    name = "wordle_feedback",
    about = "Wordle game with guess scoring, keyboard knowledge and solver constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list and keyboard language
    #[arg(short, long, global = true, value_enum, default_value_t = Language::En)]
    language: Language,

    /// Custom word list file, one word per line (overrides the embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Statistics file
    #[arg(long, global = true, env = "WORDLE_STATS", default_value = DEFAULT_STATS_PATH)]
    stats: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "WORDLE_LOG_JSON")]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Score a guess, against a secret if given
    Score {
        /// The guessed word
        guess: String,

        /// The secret word; omit for a pending row
        secret: Option<String>,
    },

    /// Print the solver payload for a guess history
    Constraints {
        /// Secret used to score entries without feedback
        #[arg(short, long)]
        secret: Option<String>,

        /// History entries: `guess:GY-GY` or a bare guess scored against --secret
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// List the words a guess history still admits
    Candidates {
        /// Secret used to score entries without feedback
        #[arg(short, long)]
        secret: Option<String>,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// History entries: `guess:GY-GY` or a bare guess scored against --secret
        entries: Vec<String>,
    },

    /// Let the local solver play against every word in the list
    Benchmark {
        /// Number of words to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Show persisted game statistics
    Stats,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            language: self.language,
            stats_path: self.stats.clone(),
            log_json: self.log_json,
            ..Settings::default()
        }
    }
}

fn load_solver(settings: &Settings, wordlist: Option<&PathBuf>) -> Result<LocalSolver> {
    let words = loader::resolve(settings.language, wordlist.map(PathBuf::as_path))
        .with_context(|| match wordlist {
            Some(path) => format!("failed to load word list {}", path.display()),
            None => "failed to load word list".to_string(),
        })?;
    if words.is_empty() {
        anyhow::bail!("the word list is empty");
    }
    Ok(LocalSolver::new(words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings();
    let full_screen = matches!(cli.command, None | Some(Commands::Play));
    init_tracing(settings.log_json, LogTarget::for_terminal(full_screen));

    tracing::debug!(?settings, "starting");

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            use wordle_feedback::interactive::{App, run_tui};

            let solver = load_solver(&settings, cli.wordlist.as_ref())?;
            let store = JsonFileStore::new(&settings.stats_path);
            let app = App::new(solver, store, settings.language, settings.max_attempts);
            run_tui(app)
        }
        Commands::Simple => {
            let mut solver = load_solver(&settings, cli.wordlist.as_ref())?;
            let mut store = JsonFileStore::new(&settings.stats_path);
            run_simple(
                &mut solver,
                &mut store,
                settings.language,
                settings.max_attempts,
            )
        }
        Commands::Score { guess, secret } => {
            let verdict = score_guess(&guess, secret.as_deref())?;
            print_verdict(&verdict);
            Ok(())
        }
        Commands::Constraints { secret, entries } => {
            let constraints = compile_entries(&entries, secret.as_deref())?;
            let json = constraints
                .to_json()
                .context("failed to encode constraints")?;
            print_constraints_json(&json);
            Ok(())
        }
        Commands::Candidates {
            secret,
            limit,
            entries,
        } => {
            let solver = load_solver(&settings, cli.wordlist.as_ref())?;
            let constraints = compile_entries(&entries, secret.as_deref())?;
            let (listed, total) = list_candidates(&solver, &constraints, limit);
            print_candidates(&listed, total);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let solver = load_solver(&settings, cli.wordlist.as_ref())?;
            let targets: Vec<Word> = solver.words().iter().take(count).cloned().collect();
            println!("Running benchmark on {} words...", targets.len());

            let result = run_benchmark(&solver, &targets, settings.max_attempts, true);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let store = JsonFileStore::new(&settings.stats_path);
            let summary = summarize(&store)?;
            print_stats_summary(&summary);
            Ok(())
        }
    }
}
