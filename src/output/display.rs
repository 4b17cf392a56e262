//! Display functions for command results

use crate::api::{ScoredWord, TupleScore};
use crate::commands::{RateResult, SolveResult, SuggestResult};
use colored::Colorize;

fn print_word_list(title: &str, words: &[ScoredWord], limit: usize) {
    println!("\n{}", title.bright_cyan().bold());
    for entry in words.iter().take(limit) {
        if entry.is_error() {
            println!("   {}", entry.word.red().bold());
            continue;
        }
        let mut line = format!(
            "   {:>2}. {:<12} {:.3}",
            entry.natural_ordering,
            entry.word.to_uppercase(),
            entry.freq_score
        );
        if let Some(stats) = entry.partition_stats {
            line.push_str(&format!(
                "   ~{:.1} left, {:.2} bits",
                stats.words_remaining, stats.entropy
            ));
        }
        println!("{line}");
    }
}

/// Print a suggestion run: replayed rows, restriction, and ranked lists
pub fn print_suggest_result(result: &SuggestResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    if result.rows.is_empty() {
        println!("Fresh board");
    }
    for (index, row) in result.rows.iter().enumerate() {
        let mut line = format!(
            "Row {}: {}",
            index + 1,
            row.word.to_uppercase().bright_yellow().bold()
        );
        if let Some(score) = row.score {
            line.push_str(&format!(
                "   fishing {:.3}, ~{:.1} left, {:.2} bits",
                score.fishing_score, score.remaining_words, score.entropy
            ));
        }
        println!("{line}");
    }
    println!("Restriction: {}", result.restriction);
    println!("{}", "─".repeat(60).cyan());

    if result.analysis.is_error() {
        println!(
            "\n{}",
            "An Error Has Occurred: no suggestions available".red().bold()
        );
        return;
    }

    println!(
        "\n{} candidate words remain",
        result.analysis.total_words.to_string().bright_yellow().bold()
    );
    print_word_list("Viable words:", &result.analysis.word_list, limit);
    print_word_list("Fishing words:", &result.analysis.fishing_words, limit);
    if let Some(best) = &result.analysis.best_words {
        print_word_list("Best partitioning words:", best, limit);
    }
}

/// Print a rated game as a per-guess table with totals
pub fn print_rate_result(result: &RateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GAME RATING:".bright_cyan().bold(),
        result.solution.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   {:<10} {:<10} {:>9} {:>6} {:>6}",
        "You", "Service", "Remaining", "Skill", "Luck"
    );
    for row in &result.score.rows {
        println!(
            "   {:<10} {:<10} {:>9} {:>6.2} {:>6.2}",
            row.player_word.to_uppercase(),
            row.solvle_word.to_uppercase(),
            row.actual_remaining,
            row.skill,
            row.luck
        );
    }
    println!(
        "\n   Overall: skill {}, luck {}",
        format!("{:.2}", result.score.skill).bright_yellow().bold(),
        format!("{:.2}", result.score.luck).bright_yellow().bold()
    );
}

/// Print the service's playout for a solution
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Playing out: {}",
        result.solution.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, guess) in result.guesses.iter().enumerate() {
        println!("Turn {}: {}", i + 1, guess.to_uppercase());
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("Solved in {} guesses", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Not solved within {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print one or more tuple evaluations
pub fn print_tuple_scores(scores: &[TupleScore], limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STARTER TUPLES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for score in scores.iter().take(limit) {
        let words: Vec<String> = score
            .tuple
            .iter()
            .map(|w| w.word.to_uppercase())
            .collect();
        println!(
            "   {:<36} ~{:.1} left, {} groups, {:.2} bits",
            words.join(" + ").bright_yellow(),
            score.partition_stats.words_remaining,
            score.partition_stats.group_count,
            score.partition_stats.entropy
        );
    }
}
