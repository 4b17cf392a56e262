//! Wordle Assistant - CLI
//!
//! Tracks letter constraints from played guesses and queries a remote
//! ranking service for suggestions, game ratings, playouts, and starter
//! tuples.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_assistant::{
    api::{HttpTransport, SolverClient, SolverConfig, StrategyPreset, WordList},
    commands::{
        RateConfig, SolveConfig, SuggestConfig, TupleConfig, finish_tuple, rate_game, score_tuple,
        solve_game, suggest_words,
    },
    output::{print_rate_result, print_solve_result, print_suggest_result, print_tuple_scores},
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Constraint-tracking assistant backed by a remote word-ranking service",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the ranking service
    #[arg(long, global = true, default_value = "http://localhost:8081/solvle")]
    base_url: String,

    /// Dictionary to rank against
    #[arg(short = 'w', long, global = true, value_enum, default_value = "simple")]
    word_list: WordList,

    /// Heuristic strategy preset
    #[arg(short, long, global = true, value_enum, default_value = "simple")]
    strategy: StrategyPreset,

    /// Only suggest words consistent with every previous guess
    #[arg(long, global = true)]
    hard_mode: bool,

    /// Only suggest words that can be the answer
    #[arg(long, global = true)]
    require_answer: bool,

    /// Word length (1-9)
    #[arg(short = 'l', long, global = true, default_value = "5")]
    word_length: usize,

    /// Number of attempts on the board
    #[arg(short = 'a', long, global = true, default_value = "6")]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay guesses and fetch ranked suggestions
    Suggest {
        /// Played guesses, in order
        #[arg(short, long)]
        guess: Vec<String>,

        /// One marking per guess: G (pinned), Y (present elsewhere), - (absent)
        #[arg(short, long)]
        marking: Vec<String>,

        /// Auto-color guesses against this solution instead of markings
        #[arg(long)]
        solution: Option<String>,

        /// Fetch a score for each entered guess
        #[arg(short, long)]
        rate: bool,

        /// How many words to show per list
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Rate a played game against its solution
    Rate {
        /// The solution word
        solution: String,

        /// The guesses that were played, in order
        guesses: Vec<String>,
    },

    /// Ask the service to play out a solution
    Solve {
        /// The solution word
        solution: String,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Evaluate a fixed starting sequence
    ScoreTuple {
        /// The starting words, in order
        words: Vec<String>,
    },

    /// Fetch ranked completions for a starting sequence
    FinishTuple {
        /// The starting words, in order
        words: Vec<String>,

        /// How many completions to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

fn solver_config(cli: &Cli) -> SolverConfig {
    let mut config = SolverConfig::new(cli.word_list, cli.strategy);
    config.hard_mode = cli.hard_mode;
    config.require_answer = cli.require_answer;
    config.word_length = cli.word_length;
    config
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let transport = HttpTransport::new()?;
    let client = SolverClient::new(cli.base_url.clone(), transport);
    let solver = solver_config(&cli);

    match cli.command {
        Commands::Suggest {
            ref guess,
            ref marking,
            ref solution,
            rate,
            limit,
        } => {
            let config = SuggestConfig {
                solver,
                attempts: cli.attempts,
                guesses: guess.clone(),
                markings: marking.clone(),
                solution: solution.clone(),
                rate_entered: rate,
            };
            let result = suggest_words(config, &client).map_err(|e| anyhow::anyhow!(e))?;
            print_suggest_result(&result, limit);
            Ok(())
        }
        Commands::Rate {
            ref solution,
            ref guesses,
        } => {
            let config = RateConfig {
                solver,
                solution: solution.clone(),
                guesses: guesses.clone(),
            };
            let result = rate_game(config, &client).map_err(|e| anyhow::anyhow!(e))?;
            print_rate_result(&result);
            Ok(())
        }
        Commands::Solve {
            ref solution,
            ref first_word,
        } => {
            let config = SolveConfig {
                solver,
                solution: solution.clone(),
                first_word: first_word.clone(),
            };
            let result = solve_game(config, &client).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::ScoreTuple { ref words } => {
            let config = TupleConfig {
                solver,
                words: words.clone(),
            };
            let score = score_tuple(config, &client).map_err(|e| anyhow::anyhow!(e))?;
            print_tuple_scores(std::slice::from_ref(&score), 1);
            Ok(())
        }
        Commands::FinishTuple { ref words, limit } => {
            let config = TupleConfig {
                solver,
                words: words.clone(),
            };
            let completions = finish_tuple(config, &client).map_err(|e| anyhow::anyhow!(e))?;
            print_tuple_scores(&completions, limit);
            Ok(())
        }
    }
}
