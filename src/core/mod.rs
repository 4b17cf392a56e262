//! Core domain types for constraint tracking
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hash collections. All types here are pure and testable.

mod alphabet;
mod constraints;

pub use alphabet::{Alphabet, AlphabetVariant};
pub use constraints::LetterConstraints;
