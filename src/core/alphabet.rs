//! Fixed, ordered alphabets of legal letters
//!
//! The alphabet's iteration order is canonical: it determines the order in
//! which the restriction encoder emits letter segments, and the external
//! service expects the same order when parsing.

use rustc_hash::FxHashSet;
use std::fmt;

/// Master letter order shared by every variant.
///
/// Each variant filters this sequence down to its own letter set, so letters
/// common to two variants always appear in the same relative order.
const MASTER_ORDER: &str = "AÁÄBCDÐEÉFGHIÍJKLMNÑOÓPQRSẞTUÚÜVWXYÝZÞÆÖ";

/// National alphabet variants supported by the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetVariant {
    /// Plain A-Z
    English,
    /// A-Z plus ÁÐÉÍÓÚÝÞÆÖ
    Icelandic,
    /// A-Z plus Ñ
    Spanish,
    /// A-Z plus ÄÖÜẞ
    German,
}

impl AlphabetVariant {
    fn extra_letters(self) -> &'static [char] {
        match self {
            Self::English => &[],
            Self::Icelandic => &['Á', 'Ð', 'É', 'Í', 'Ó', 'Ú', 'Ý', 'Þ', 'Æ', 'Ö'],
            Self::Spanish => &['Ñ'],
            Self::German => &['Ä', 'Ö', 'Ü', 'ẞ'],
        }
    }
}

/// An ordered set of legal letters
///
/// Letters are stored in canonical (master) order and are always uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    variant: AlphabetVariant,
    letters: Vec<char>,
    members: FxHashSet<char>,
}

impl Alphabet {
    /// Create the alphabet for a national variant
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Alphabet, AlphabetVariant};
    ///
    /// let english = Alphabet::new(AlphabetVariant::English);
    /// assert_eq!(english.len(), 26);
    ///
    /// let spanish = Alphabet::new(AlphabetVariant::Spanish);
    /// assert!(spanish.contains('Ñ'));
    /// ```
    #[must_use]
    pub fn new(variant: AlphabetVariant) -> Self {
        let members: FxHashSet<char> = ('A'..='Z')
            .chain(variant.extra_letters().iter().copied())
            .collect();

        let letters: Vec<char> = MASTER_ORDER
            .chars()
            .filter(|c| members.contains(c))
            .collect();

        debug_assert_eq!(letters.len(), members.len());

        Self {
            variant,
            letters,
            members,
        }
    }

    /// The variant this alphabet was built from
    #[inline]
    #[must_use]
    pub const fn variant(&self) -> AlphabetVariant {
        self.variant
    }

    /// Number of letters in the alphabet
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True if the alphabet has no letters (never the case for built variants)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Whether `letter` is a legal letter of this alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.members.contains(&letter)
    }

    /// Iterate the letters in canonical order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    /// Map an input character to its canonical uppercase form, if legal
    ///
    /// Returns `None` for characters outside the alphabet. The sharp s maps
    /// to its capital form rather than "SS".
    #[must_use]
    pub fn normalize(&self, input: char) -> Option<char> {
        let upper = if input == 'ß' {
            'ẞ'
        } else {
            // Uppercase expansion beyond one char only happens for ligatures
            // we do not accept anyway.
            let mut it = input.to_uppercase();
            let first = it.next()?;
            if it.next().is_some() {
                return None;
            }
            first
        };
        self.contains(upper).then_some(upper)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
