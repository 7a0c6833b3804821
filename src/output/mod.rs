//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_candidates, print_constraints_json, print_stats_summary,
    print_verdict,
};
