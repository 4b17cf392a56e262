//! Restriction-string serialization
//!
//! Projects the letter constraint store into the canonical string consumed by
//! the external ranking service as a path segment. The format is one segment
//! per available letter, in canonical alphabet order: the letter itself, then
//! the 1-indexed positions where it is pinned (digits concatenated), then `!`
//! and the 1-indexed positions it is excluded from, if any.
//!
//! Positions are single digits, so the encoding is only unambiguous for word
//! lengths up to 9; `Settings` clamps word length accordingly.

use crate::board::Board;
use crate::core::{Alphabet, LetterConstraints};
use log::debug;

/// Encode the full constraint state
///
/// Letters outside the available set are omitted entirely; every available
/// letter appears exactly once. Encoding the same state twice yields
/// byte-identical strings.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{Alphabet, AlphabetVariant, LetterConstraints};
/// use wordle_assistant::encode::restriction_string;
///
/// let alphabet = Alphabet::new(AlphabetVariant::English);
/// let mut constraints = LetterConstraints::new(&alphabet, 5);
/// constraints.remove_available('Z');
/// constraints.add_known(1, 'R');
/// constraints.add_unsure(2, 'A');
///
/// let encoded = restriction_string(&alphabet, &constraints);
/// assert!(encoded.contains("R2"));
/// assert!(encoded.contains("A!3"));
/// assert!(!encoded.contains('Z'));
/// ```
#[must_use]
pub fn restriction_string(alphabet: &Alphabet, constraints: &LetterConstraints) -> String {
    let word_length = constraints.word_length();
    let mut out = String::with_capacity(alphabet.len() * 2);

    for letter in alphabet.letters() {
        if !constraints.is_available(letter) {
            continue;
        }
        out.push(letter);
        for position in 0..word_length {
            if constraints.known_at(position) == Some(letter) {
                debug!("known letter {letter} pos {}", position + 1);
                push_position(&mut out, position);
            }
        }
        let mut has_unsure = false;
        for position in 0..word_length {
            if constraints.is_unsure_at(position, letter) {
                if !has_unsure {
                    has_unsure = true;
                    out.push('!');
                }
                debug!("unsure letter {letter} pos {}", position + 1);
                push_position(&mut out, position);
            }
        }
    }

    out
}

/// Concatenate every placed letter on the board, row-major
///
/// Used for anagram-style lookups; empty cells are skipped.
#[must_use]
pub fn anagram_string(board: &Board) -> String {
    let settings = board.settings();
    let mut out = String::with_capacity(settings.attempts * settings.word_length);
    for attempt in 0..settings.attempts {
        for position in 0..settings.word_length {
            if let Some(letter) = board.cell(attempt, position) {
                out.push(letter);
            }
        }
    }
    out
}

fn push_position(out: &mut String, position: usize) {
    // Word length is clamped to 9, so the 1-indexed position is one digit.
    let digit = char::from_digit(position as u32 + 1, 10).unwrap_or('?');
    debug_assert_ne!(digit, '?');
    out.push(digit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Settings;
    use crate::core::AlphabetVariant;

    fn fresh() -> (Alphabet, LetterConstraints) {
        let alphabet = Alphabet::new(AlphabetVariant::English);
        let constraints = LetterConstraints::new(&alphabet, 5);
        (alphabet, constraints)
    }

    #[test]
    fn fresh_state_is_the_whole_alphabet() {
        let (alphabet, constraints) = fresh();
        let encoded = restriction_string(&alphabet, &constraints);
        assert_eq!(encoded, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn crane_scenario() {
        // Scenario: guess CRANE; C/N/E ruled out, R pinned at 2, A unsure at 3.
        let (alphabet, mut constraints) = fresh();
        constraints.remove_available('C');
        constraints.add_known(1, 'R');
        constraints.add_unsure(2, 'A');
        constraints.remove_available('N');
        constraints.remove_available('E');

        let encoded = restriction_string(&alphabet, &constraints);
        assert!(encoded.contains("R2"), "got {encoded}");
        assert!(encoded.contains("A!3"), "got {encoded}");
        for gone in ['C', 'N', 'E'] {
            assert!(!encoded.contains(gone), "{gone} leaked into {encoded}");
        }
    }

    #[test]
    fn every_available_letter_appears_exactly_once() {
        let (alphabet, mut constraints) = fresh();
        constraints.remove_available('Q');
        constraints.remove_available('X');
        constraints.add_known(0, 'S');
        constraints.add_unsure(2, 'T');

        let encoded = restriction_string(&alphabet, &constraints);
        for letter in alphabet.letters() {
            let count = encoded.chars().filter(|&c| c == letter).count();
            if constraints.is_available(letter) {
                assert_eq!(count, 1, "{letter} appears {count} times in {encoded}");
            } else {
                assert_eq!(count, 0, "{letter} should be absent from {encoded}");
            }
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let (alphabet, mut constraints) = fresh();
        constraints.add_known(4, 'E');
        constraints.add_unsure(0, 'E');
        constraints.remove_available('J');
        let first = restriction_string(&alphabet, &constraints);
        let second = restriction_string(&alphabet, &constraints);
        assert_eq!(first, second);
    }

    #[test]
    fn multiple_known_positions_concatenate_digits() {
        let (alphabet, mut constraints) = fresh();
        constraints.add_known(0, 'E');
        constraints.add_known(4, 'E');
        let encoded = restriction_string(&alphabet, &constraints);
        assert!(encoded.contains("E15"), "got {encoded}");
    }

    #[test]
    fn known_and_unsure_combine_in_one_segment() {
        // A letter pinned at one position and excluded from another:
        // positions first, then the exclusion marker.
        let (alphabet, mut constraints) = fresh();
        constraints.add_known(2, 'T');
        constraints.add_unsure(0, 'T');
        constraints.add_unsure(4, 'T');
        let encoded = restriction_string(&alphabet, &constraints);
        assert!(encoded.contains("T3!15"), "got {encoded}");
    }

    #[test]
    fn icelandic_letters_encode_in_master_order() {
        let alphabet = Alphabet::new(AlphabetVariant::Icelandic);
        let mut constraints = LetterConstraints::new(&alphabet, 5);
        constraints.add_known(0, 'Þ');
        let encoded = restriction_string(&alphabet, &constraints);
        assert!(encoded.contains("Þ1"), "got {encoded}");
        assert!(encoded.starts_with('A'));
        assert!(encoded.ends_with('Ö'));
    }

    #[test]
    fn anagram_string_collects_placed_letters() {
        let alphabet = Alphabet::new(AlphabetVariant::English);
        let mut constraints = LetterConstraints::new(&alphabet, 5);
        let mut board = Board::new(Settings::new(6, 5));
        board.place_word(&mut constraints, "CRANE");
        board.place_letter('S');
        board.place_letter('T');
        assert_eq!(anagram_string(&board), "CRANEST");
    }

    #[test]
    fn anagram_string_empty_board() {
        let board = Board::new(Settings::new(6, 5));
        assert_eq!(anagram_string(&board), "");
    }
}
