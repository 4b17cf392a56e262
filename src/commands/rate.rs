//! Game rating command
//!
//! Sends a finished (or abandoned) game to the service and returns the
//! per-guess skill and luck breakdown.

use crate::api::{GameScore, SolverClient, SolverConfig, Transport};

/// Configuration for rating a game
pub struct RateConfig {
    pub solver: SolverConfig,
    pub solution: String,
    pub guesses: Vec<String>,
}

/// Result of rating a game
pub struct RateResult {
    pub solution: String,
    pub score: GameScore,
}

/// Rate a played game against its solution
///
/// # Errors
///
/// Returns an error if no guesses were given or the service call fails.
pub fn rate_game<T: Transport>(
    config: RateConfig,
    client: &SolverClient<T>,
) -> Result<RateResult, String> {
    if config.guesses.is_empty() {
        return Err("at least one guess is required".to_string());
    }
    let score = client
        .rate_game(&config.solution, &config.guesses, &config.solver)
        .map_err(|e| format!("Rating failed: {e}"))?;
    Ok(RateResult {
        solution: config.solution,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;

    struct StubTransport(Option<&'static str>);

    impl Transport for StubTransport {
        fn get(&self, _url: &str) -> Result<String, TransportError> {
            self.0
                .map(String::from)
                .ok_or(TransportError::Status(500))
        }
    }

    const SCORE: &str = r#"{
        "rows": [
            {"playerWord": "crane", "solvleWord": "slate",
             "actualRemaining": 12, "skill": 0.8, "luck": 0.3, "heuristic": 0.7},
            {"playerWord": "split", "solvleWord": "split",
             "actualRemaining": 1, "skill": 1.0, "luck": 0.9, "heuristic": 1.0}
        ],
        "skill": 0.9, "luck": 0.6, "heuristic": 0.85
    }"#;

    #[test]
    fn rates_a_game() {
        let client = SolverClient::new("http://host/solvle", StubTransport(Some(SCORE)));
        let config = RateConfig {
            solver: SolverConfig::default(),
            solution: "SPLIT".to_string(),
            guesses: vec!["CRANE".to_string(), "SPLIT".to_string()],
        };
        let result = rate_game(config, &client).unwrap();
        assert_eq!(result.score.rows.len(), 2);
        assert!((result.score.skill - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn refuses_empty_guess_list() {
        let client = SolverClient::new("http://host/solvle", StubTransport(Some(SCORE)));
        let config = RateConfig {
            solver: SolverConfig::default(),
            solution: "SPLIT".to_string(),
            guesses: vec![],
        };
        assert!(rate_game(config, &client).is_err());
    }

    #[test]
    fn surfaces_service_failures() {
        let client = SolverClient::new("http://host/solvle", StubTransport(None));
        let config = RateConfig {
            solver: SolverConfig::default(),
            solution: "SPLIT".to_string(),
            guesses: vec!["CRANE".to_string()],
        };
        assert!(rate_game(config, &client).is_err());
    }
}
