//! Command implementations

pub mod benchmark;
pub mod candidates;
pub mod constraints;
pub mod score;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkResult, play_one, run_benchmark};
pub use candidates::list_candidates;
pub use constraints::{build_history, compile_entries, parse_entry};
pub use score::score_guess;
pub use simple::{play_lines, run_simple};
pub use stats::summarize;
