//! Closed configuration options for the ranking service
//!
//! Every knob the service accepts is a named, validated option here; no
//! free-form strings travel through the request path.

use crate::core::AlphabetVariant;
use clap::ValueEnum;
use std::fmt;

/// Dictionary the service ranks against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WordList {
    /// Only valid solutions
    Simple,
    /// Solutions that have not been used yet
    Reduced,
    /// All allowable guesses
    Big,
    /// Solutions plus common extensions
    Extended,
    Icelandic,
    IcelandicFishing,
    Spanish,
    German,
}

impl WordList {
    /// The identifier the service expects in the `wordList` parameter
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Simple => "SIMPLE",
            Self::Reduced => "REDUCED",
            Self::Big => "BIG",
            Self::Extended => "EXTENDED",
            Self::Icelandic => "ICELANDIC",
            Self::IcelandicFishing => "ICELANDIC_FISHING",
            Self::Spanish => "SPANISH",
            Self::German => "GERMAN",
        }
    }

    /// Which alphabet a dictionary implies
    #[must_use]
    pub const fn alphabet_variant(self) -> AlphabetVariant {
        match self {
            Self::Simple | Self::Reduced | Self::Big | Self::Extended => AlphabetVariant::English,
            Self::Icelandic | Self::IcelandicFishing => AlphabetVariant::Icelandic,
            Self::Spanish => AlphabetVariant::Spanish,
            Self::German => AlphabetVariant::German,
        }
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Heuristic strategy preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyPreset {
    /// Frequency heuristics only
    Simple,
    /// Frequency heuristics plus partition scoring
    SimpleWithPartitioning,
    /// Position-aware heuristics minimizing the mean score
    OptimalMean,
    /// Position-aware heuristics plus partition scoring
    OptimalMeanWithPartitioning,
    /// Maximize the odds of finishing in two
    TwoOrLess,
    /// Maximize the odds of finishing in three
    ThreeOrLess,
    /// Maximize the odds of finishing in four
    FourOrLess,
    /// Minimize the worst case
    LowestMax,
}

impl StrategyPreset {
    /// The identifier the service expects in the `wordConfig` parameter
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Simple => "SIMPLE",
            Self::SimpleWithPartitioning => "SIMPLE_WITH_PARTITIONING",
            Self::OptimalMean => "OPTIMAL_MEAN",
            Self::OptimalMeanWithPartitioning => "OPTIMAL_MEAN_WITH_PARTITIONING",
            Self::TwoOrLess => "TWO_OR_LESS",
            Self::ThreeOrLess => "THREE_OR_LESS",
            Self::FourOrLess => "FOUR_OR_LESS",
            Self::LowestMax => "LOWEST_MAX",
        }
    }

    /// Whether this preset makes the service compute partition statistics
    ///
    /// Everything except the two plain heuristics does.
    #[must_use]
    pub const fn uses_partitioning(self) -> bool {
        !matches!(self, Self::Simple | Self::OptimalMean)
    }
}

impl fmt::Display for StrategyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// The full request configuration sent alongside every restriction string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub word_list: WordList,
    pub strategy: StrategyPreset,
    pub hard_mode: bool,
    pub require_answer: bool,
    pub word_length: usize,
}

impl SolverConfig {
    #[must_use]
    pub const fn new(word_list: WordList, strategy: StrategyPreset) -> Self {
        Self {
            word_list,
            strategy,
            hard_mode: false,
            require_answer: false,
            word_length: 5,
        }
    }

    /// Render the configuration as a query string
    ///
    /// Key order is fixed so identical configurations produce identical URLs.
    #[must_use]
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("hardMode", if self.hard_mode { "true" } else { "false" })
            .append_pair("wordConfig", self.strategy.as_param())
            .append_pair("wordLength", &self.word_length.to_string())
            .append_pair("wordList", self.word_list.as_param())
            .append_pair(
                "requireAnswer",
                if self.require_answer { "true" } else { "false" },
            )
            .finish()
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(WordList::Simple, StrategyPreset::Simple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_string() {
        let config = SolverConfig::default();
        assert_eq!(
            config.query_string(),
            "hardMode=false&wordConfig=SIMPLE&wordLength=5&wordList=SIMPLE&requireAnswer=false"
        );
    }

    #[test]
    fn query_string_reflects_every_flag() {
        let mut config = SolverConfig::new(
            WordList::Big,
            StrategyPreset::OptimalMeanWithPartitioning,
        );
        config.hard_mode = true;
        config.require_answer = true;
        config.word_length = 7;
        assert_eq!(
            config.query_string(),
            "hardMode=true&wordConfig=OPTIMAL_MEAN_WITH_PARTITIONING&wordLength=7&wordList=BIG&requireAnswer=true"
        );
    }

    #[test]
    fn partitioning_presets() {
        assert!(!StrategyPreset::Simple.uses_partitioning());
        assert!(!StrategyPreset::OptimalMean.uses_partitioning());
        assert!(StrategyPreset::SimpleWithPartitioning.uses_partitioning());
        assert!(StrategyPreset::TwoOrLess.uses_partitioning());
        assert!(StrategyPreset::LowestMax.uses_partitioning());
    }

    #[test]
    fn word_lists_map_to_alphabets() {
        assert_eq!(
            WordList::Big.alphabet_variant(),
            AlphabetVariant::English
        );
        assert_eq!(
            WordList::Icelandic.alphabet_variant(),
            AlphabetVariant::Icelandic
        );
        assert_eq!(
            WordList::Spanish.alphabet_variant(),
            AlphabetVariant::Spanish
        );
        assert_eq!(
            WordList::German.alphabet_variant(),
            AlphabetVariant::German
        );
    }
}
