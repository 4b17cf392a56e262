//! Command implementations

pub mod rate;
pub mod solve;
pub mod suggest;
pub mod tuple;

pub use rate::{RateConfig, RateResult, rate_game};
pub use solve::{SolveConfig, SolveResult, solve_game};
pub use suggest::{RowSummary, SuggestConfig, SuggestResult, suggest_words};
pub use tuple::{TupleConfig, finish_tuple, score_tuple};
