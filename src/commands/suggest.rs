//! Suggestion command
//!
//! Replays a sequence of guesses into a session, applies manual markings or
//! auto-colors against a known solution, then fetches the ranked suggestion
//! lists for the resulting restriction string.

use crate::api::{Analysis, SolverClient, SolverConfig, Transport};
use crate::board::RowScore;
use crate::session::Session;

/// Configuration for a suggestion run
pub struct SuggestConfig {
    pub solver: SolverConfig,
    pub attempts: usize,
    pub guesses: Vec<String>,
    /// One marking string per guess (`G`/`Y`/`-`); ignored when a solution
    /// is given.
    pub markings: Vec<String>,
    /// Auto-color every guess against this solution instead of markings.
    pub solution: Option<String>,
    /// Fetch a per-row score for each entered guess.
    pub rate_entered: bool,
}

/// One replayed guess with its optional fetched score
pub struct RowSummary {
    pub word: String,
    pub score: Option<RowScore>,
}

/// Result of a suggestion run
pub struct SuggestResult {
    pub restriction: String,
    pub rows: Vec<RowSummary>,
    pub analysis: Analysis,
}

/// Replay guesses and fetch suggestions
///
/// # Errors
///
/// Returns an error if:
/// - A guess or the solution has the wrong length or foreign letters
/// - Markings are missing for a guess or use unknown symbols
/// - More guesses are given than the board has attempts
pub fn suggest_words<T: Transport>(
    config: SuggestConfig,
    client: &SolverClient<T>,
) -> Result<SuggestResult, String> {
    if config.solution.is_none() && config.markings.len() != config.guesses.len() {
        return Err(format!(
            "need one marking per guess: {} guesses, {} markings",
            config.guesses.len(),
            config.markings.len()
        ));
    }
    if config.guesses.len() > config.attempts {
        return Err(format!(
            "{} guesses exceed the {} configured attempts",
            config.guesses.len(),
            config.attempts
        ));
    }

    let mut session = Session::new(client.base().to_string(), config.solver, config.attempts);
    session.set_rate_entered_words(config.rate_entered);
    if let Some(solution) = &config.solution {
        session
            .set_solution(solution)
            .map_err(|e| format!("Invalid solution: {e}"))?;
    }

    for (index, guess) in config.guesses.iter().enumerate() {
        session
            .place_word(guess)
            .map_err(|e| format!("Invalid guess '{guess}': {e}"))?;
        if config.solution.is_none() {
            session
                .mark_row(index, &config.markings[index])
                .map_err(|e| format!("Invalid marking for '{guess}': {e}"))?;
        }
        if config.rate_entered {
            let score = client
                .word_score(&session.restriction(), guess, session.config())
                .map_err(|e| format!("Scoring '{guess}' failed: {e}"))?;
            session.apply_row_score(index, &score);
        }
    }

    let restriction = session.restriction();
    let (token, _url) = session.analysis_request();
    let analysis = client.analysis(&restriction, session.config());
    session.accept_analysis(token, analysis.clone());

    let rows = config
        .guesses
        .iter()
        .enumerate()
        .map(|(index, word)| RowSummary {
            word: word.clone(),
            score: session.board().row_score(index),
        })
        .collect();

    Ok(SuggestResult {
        restriction,
        rows,
        analysis,
    })
}
