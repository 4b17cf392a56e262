//! Request URL construction
//!
//! One builder per service endpoint. Restriction strings and words travel as
//! path segments and are percent-encoded; everything configurable goes into
//! the query string built by `SolverConfig`.

use super::SolverConfig;

/// Percent-encode a path segment
///
/// Restriction strings carry `!` and, for national alphabets, non-ASCII
/// letters; both must be escaped before use in a URL path.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}

fn join(base: &str, path: &str, query: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/{path}?{query}")
}

/// `GET /{restriction}`: ranked candidate, fishing, and cut lists
#[must_use]
pub fn analysis_url(base: &str, restriction: &str, config: &SolverConfig) -> String {
    join(base, &encode_segment(restriction), &config.query_string())
}

/// `GET /{restriction}/{word}`: score one candidate under the restrictions
#[must_use]
pub fn word_score_url(base: &str, restriction: &str, word: &str, config: &SolverConfig) -> String {
    let path = format!("{}/{}", encode_segment(restriction), encode_segment(word));
    join(base, &path, &config.query_string())
}

/// `GET /rate/{solution}?guesses=...`: rate a played game
#[must_use]
pub fn rate_url(base: &str, solution: &str, guesses: &[String], config: &SolverConfig) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    for guess in guesses {
        query.append_pair("guesses", guess);
    }
    let guesses = query.finish();
    let path = format!("rate/{}", encode_segment(solution));
    join(base, &path, &format!("{guesses}&{}", config.query_string()))
}

/// `GET /solve/{solution}?firstWord=`: the service's own guess sequence
#[must_use]
pub fn solve_url(
    base: &str,
    solution: &str,
    first_word: Option<&str>,
    config: &SolverConfig,
) -> String {
    let path = format!("solve/{}", encode_segment(solution));
    let mut query = config.query_string();
    if let Some(word) = first_word {
        let first = form_urlencoded::Serializer::new(String::new())
            .append_pair("firstWord", word)
            .finish();
        query = format!("{query}&{first}");
    }
    join(base, &path, &query)
}

/// `GET /scoreTuple/{words}`: combined statistics for a starting sequence
#[must_use]
pub fn score_tuple_url(base: &str, words: &[String], config: &SolverConfig) -> String {
    let path = format!("scoreTuple/{}", encode_segment(&words.join(",")));
    join(base, &path, &config.query_string())
}

/// `GET /finishTuple/{words}`: ranked completions for a starting sequence
#[must_use]
pub fn finish_tuple_url(base: &str, words: &[String], config: &SolverConfig) -> String {
    let path = format!("finishTuple/{}", encode_segment(&words.join(",")));
    join(base, &path, &config.query_string())
}
