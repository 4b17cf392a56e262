//! Starter-tuple commands
//!
//! A starter tuple is a fixed opening sequence of guesses played regardless
//! of feedback. `score_tuple` evaluates one such sequence; `finish_tuple`
//! asks the service for ranked ways to extend it.

use crate::api::{SolverClient, SolverConfig, Transport, TupleScore};

/// Configuration shared by both tuple commands
pub struct TupleConfig {
    pub solver: SolverConfig,
    pub words: Vec<String>,
}

/// Evaluate a fixed starting sequence
///
/// # Errors
///
/// Returns an error if no words were given or the service call fails.
pub fn score_tuple<T: Transport>(
    config: TupleConfig,
    client: &SolverClient<T>,
) -> Result<TupleScore, String> {
    if config.words.is_empty() {
        return Err("at least one word is required".to_string());
    }
    client
        .score_tuple(&config.words, &config.solver)
        .map_err(|e| format!("Tuple scoring failed: {e}"))
}

/// Fetch ranked completions for a starting sequence
///
/// # Errors
///
/// Returns an error if no words were given or the service call fails.
pub fn finish_tuple<T: Transport>(
    config: TupleConfig,
    client: &SolverClient<T>,
) -> Result<Vec<TupleScore>, String> {
    if config.words.is_empty() {
        return Err("at least one word is required".to_string());
    }
    client
        .finish_tuple(&config.words, &config.solver)
        .map_err(|e| format!("Tuple completion failed: {e}"))
}
