//! Wordle Assistant
//!
//! Client-side constraint tracking for an interactive word-puzzle assistant.
//! As guesses are entered into a grid, the crate maintains which letters are
//! still viable, pinned to a position, or excluded from specific positions,
//! reconciles that state when guesses are edited out of order, and serializes
//! it into the restriction string consumed by the external ranking service.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{Alphabet, AlphabetVariant, LetterConstraints};
//! use wordle_assistant::encode::restriction_string;
//!
//! let alphabet = Alphabet::new(AlphabetVariant::English);
//! let constraints = LetterConstraints::new(&alphabet, 5);
//!
//! // Fresh board: every letter is still available, nothing is known.
//! let restriction = restriction_string(&alphabet, &constraints);
//! assert_eq!(restriction.len(), 26);
//! ```

// Core domain types
pub mod core;

// Guess grid and constraint reconciliation
pub mod board;

// Restriction-string serialization
pub mod encode;

// External ranking-service contract
pub mod api;

// State owner tying board, constraints, and requests together
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
