//! Terminal output formatting
//!
//! Display utilities for CLI results.

pub mod display;

pub use display::{print_rate_result, print_solve_result, print_suggest_result, print_tuple_scores};
