//! Service-playout command
//!
//! Asks the service to play out a game against a known solution and returns
//! the guess sequence it would use.

use crate::api::{SolverClient, SolverConfig, Transport};

/// Configuration for a playout
pub struct SolveConfig {
    pub solver: SolverConfig,
    pub solution: String,
    /// Force the opening guess instead of letting the service pick.
    pub first_word: Option<String>,
}

/// Result of a playout
pub struct SolveResult {
    pub solution: String,
    pub guesses: Vec<String>,
    pub solved: bool,
}

/// Ask the service how it would solve for the configured solution
///
/// # Errors
///
/// Returns an error if the service call fails or returns no guesses.
pub fn solve_game<T: Transport>(
    config: SolveConfig,
    client: &SolverClient<T>,
) -> Result<SolveResult, String> {
    let guesses = client
        .solve(
            &config.solution,
            config.first_word.as_deref(),
            &config.solver,
        )
        .map_err(|e| format!("Solve failed: {e}"))?;
    if guesses.is_empty() {
        return Err(format!("service returned no guesses for {}", config.solution));
    }
    let solved = guesses
        .last()
        .is_some_and(|last| last.eq_ignore_ascii_case(&config.solution));
    Ok(SolveResult {
        solution: config.solution,
        guesses,
        solved,
    })
}
