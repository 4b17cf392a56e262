//! Response types for the ranking service
//!
//! Mirrors the JSON the service returns. Fields the display layer never
//! reads are tolerated but not modeled; missing optional structures decode
//! as `None` so a lean service build still parses.

use serde::Deserialize;

/// Sentinel word shown when a request fails or the body cannot be decoded
pub const ERROR_WORD: &str = "An Error Has Occurred";

/// Partition statistics attached to a word when partitioning is enabled
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionStats {
    pub words_remaining: f64,
    #[serde(default)]
    pub group_count: u32,
    pub entropy: f64,
}

/// One ranked word with its frequency/fitness score
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredWord {
    pub natural_ordering: u32,
    pub word: String,
    pub freq_score: f64,
    #[serde(default)]
    pub partition_stats: Option<PartitionStats>,
}

impl ScoredWord {
    fn error_sentinel() -> Self {
        Self {
            natural_ordering: 1,
            word: ERROR_WORD.to_string(),
            freq_score: 0.0,
            partition_stats: None,
        }
    }

    /// Whether this entry is the failure placeholder
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.word == ERROR_WORD
    }
}

/// The candidate analysis for one restriction string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub word_list: Vec<ScoredWord>,
    pub fishing_words: Vec<ScoredWord>,
    /// Present only when the strategy preset enables partitioning, and null
    /// when too many candidates remain to partition.
    #[serde(default)]
    pub best_words: Option<Vec<ScoredWord>>,
    pub total_words: u64,
}

impl Analysis {
    /// The degraded result shown in place of a failed or malformed response
    ///
    /// Every list gets a single placeholder entry so the display always has
    /// something to show; the total drops to zero.
    #[must_use]
    pub fn error_sentinel() -> Self {
        Self {
            word_list: vec![ScoredWord::error_sentinel()],
            fishing_words: vec![ScoredWord::error_sentinel()],
            best_words: Some(vec![ScoredWord::error_sentinel()]),
            total_words: 0,
        }
    }

    /// Whether this analysis is the failure placeholder
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.word_list.first().is_some_and(ScoredWord::is_error)
    }
}

/// Score for a single word under the current restrictions
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordScore {
    pub fishing_score: f64,
    pub remaining_words: f64,
    #[serde(default)]
    pub entropy: f64,
}

/// Per-guess rating of a completed or partial game
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScoreRow {
    pub player_word: String,
    #[serde(default)]
    pub solvle_word: String,
    #[serde(default)]
    pub actual_remaining: i64,
    pub skill: f64,
    pub luck: f64,
    pub heuristic: f64,
}

/// Aggregate game rating
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub rows: Vec<GameScoreRow>,
    pub skill: f64,
    pub luck: f64,
    pub heuristic: f64,
}

/// One word inside a rated tuple, with its position in the sequence
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TupleWord {
    pub word: String,
    #[serde(default)]
    pub order: i32,
}

/// Combined statistics for a fixed starting sequence
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleScore {
    pub tuple: Vec<TupleWord>,
    pub partition_stats: PartitionStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_analysis_payload() {
        let body = r#"{
            "wordList": [
                {"naturalOrdering": 1, "word": "crane", "freqScore": 0.93,
                 "partitionStats": {"wordsRemaining": 12.5, "groupCount": 140, "entropy": 5.1}},
                {"naturalOrdering": 2, "word": "slate", "freqScore": 0.91}
            ],
            "fishingWords": [
                {"naturalOrdering": 1, "word": "arose", "freqScore": 0.88}
            ],
            "bestWords": null,
            "totalWords": 2315
        }"#;

        let analysis: Analysis = serde_json::from_str(body).unwrap();
        assert_eq!(analysis.total_words, 2315);
        assert_eq!(analysis.word_list.len(), 2);
        assert_eq!(analysis.word_list[0].word, "crane");
        let stats = analysis.word_list[0].partition_stats.unwrap();
        assert!((stats.entropy - 5.1).abs() < f64::EPSILON);
        assert_eq!(analysis.word_list[1].partition_stats, None);
        assert_eq!(analysis.best_words, None);
        assert!(!analysis.is_error());
    }

    #[test]
    fn decodes_analysis_without_best_words_field() {
        let body = r#"{"wordList": [], "fishingWords": [], "totalWords": 0}"#;
        let analysis: Analysis = serde_json::from_str(body).unwrap();
        assert_eq!(analysis.best_words, None);
    }

    #[test]
    fn malformed_analysis_fails_to_decode() {
        let body = r#"{"fishingWords": [], "totalWords": 10}"#;
        assert!(serde_json::from_str::<Analysis>(body).is_err());
    }

    #[test]
    fn error_sentinel_is_recognizable() {
        let sentinel = Analysis::error_sentinel();
        assert!(sentinel.is_error());
        assert_eq!(sentinel.total_words, 0);
        assert_eq!(sentinel.word_list[0].word, ERROR_WORD);
        assert_eq!(sentinel.fishing_words.len(), 1);
    }

    #[test]
    fn decodes_word_score() {
        let body = r#"{"fishingScore": 0.72, "remainingWords": 3.4, "entropy": 4.9}"#;
        let score: WordScore = serde_json::from_str(body).unwrap();
        assert!((score.remaining_words - 3.4).abs() < f64::EPSILON);
    }

    #[test]
    fn decodes_game_score() {
        let body = r#"{
            "rows": [
                {"playerWord": "crane", "solvleWord": "slate",
                 "actualRemaining": 12, "skill": 0.8, "luck": 0.4, "heuristic": 0.7}
            ],
            "skill": 0.8, "luck": 0.4, "heuristic": 0.7
        }"#;
        let score: GameScore = serde_json::from_str(body).unwrap();
        assert_eq!(score.rows.len(), 1);
        assert_eq!(score.rows[0].player_word, "crane");
        assert!((score.luck - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn decodes_tuple_scores() {
        let body = r#"[
            {"tuple": [{"word": "crane", "order": 0}, {"word": "spilt", "order": 1}],
             "partitionStats": {"wordsRemaining": 2.1, "groupCount": 900, "entropy": 9.7}}
        ]"#;
        let scores: Vec<TupleScore> = serde_json::from_str(body).unwrap();
        assert_eq!(scores[0].tuple[1].word, "spilt");
        assert_eq!(scores[0].tuple[1].order, 1);
        assert!((scores[0].partition_stats.entropy - 9.7).abs() < f64::EPSILON);
    }
}
