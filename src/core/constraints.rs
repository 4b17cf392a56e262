//! Letter constraint store
//!
//! Three derived views over the alphabet: letters still *available* as
//! candidates, letters *known* to occupy a specific position, and letters
//! known to be in the word but *unsure* of position (proven absent from
//! specific positions).
//!
//! Invariants, maintained solely through the mutators here:
//! - a known letter is always available
//! - an unsure letter is always available and never equals the known letter
//!   at the same position

use super::Alphabet;
use rustc_hash::FxHashSet;

/// Constraint state over one alphabet and one word length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterConstraints {
    available: FxHashSet<char>,
    known: Vec<Option<char>>,
    unsure: Vec<FxHashSet<char>>,
}

impl LetterConstraints {
    /// Create a fresh store: the full alphabet available, nothing known
    #[must_use]
    pub fn new(alphabet: &Alphabet, word_length: usize) -> Self {
        Self {
            available: alphabet.letters().collect(),
            known: vec![None; word_length],
            unsure: vec![FxHashSet::default(); word_length],
        }
    }

    /// Number of positions tracked
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.known.len()
    }

    /// Whether `letter` is still a viable candidate anywhere
    #[inline]
    #[must_use]
    pub fn is_available(&self, letter: char) -> bool {
        self.available.contains(&letter)
    }

    /// The letter pinned at `position`, if any
    #[inline]
    #[must_use]
    pub fn known_at(&self, position: usize) -> Option<char> {
        self.known.get(position).copied().flatten()
    }

    /// Whether `letter` is marked unsure (present, but not here) at `position`
    #[inline]
    #[must_use]
    pub fn is_unsure_at(&self, position: usize, letter: char) -> bool {
        self.unsure
            .get(position)
            .is_some_and(|set| set.contains(&letter))
    }

    /// Pin `letter` at `position`
    ///
    /// The letter is restored to the available set if needed and removed from
    /// the unsure set at the same position, keeping the store invariants.
    pub fn add_known(&mut self, position: usize, letter: char) {
        if position >= self.known.len() {
            return;
        }
        self.available.insert(letter);
        self.unsure[position].remove(&letter);
        self.known[position] = Some(letter);
    }

    /// Unpin whatever letter is at `position`
    pub fn clear_known(&mut self, position: usize) {
        if let Some(slot) = self.known.get_mut(position) {
            *slot = None;
        }
    }

    /// Mark `letter` as present in the word but excluded from `position`
    ///
    /// Silently ignored when `letter` is already pinned at that exact
    /// position; pinned and unsure are mutually exclusive per slot.
    pub fn add_unsure(&mut self, position: usize, letter: char) {
        if position >= self.unsure.len() || self.known[position] == Some(letter) {
            return;
        }
        self.available.insert(letter);
        self.unsure[position].insert(letter);
    }

    /// Remove an unsure mark
    pub fn remove_unsure(&mut self, position: usize, letter: char) {
        if let Some(set) = self.unsure.get_mut(position) {
            set.remove(&letter);
        }
    }

    /// Put `letter` back into the available set
    pub fn restore_available(&mut self, letter: char) {
        self.available.insert(letter);
    }

    /// Eliminate `letter` as a candidate
    ///
    /// Also clears any known or unsure marks for the letter, since both imply
    /// availability.
    pub fn remove_available(&mut self, letter: char) {
        self.available.remove(&letter);
        for slot in &mut self.known {
            if *slot == Some(letter) {
                *slot = None;
            }
        }
        for set in &mut self.unsure {
            set.remove(&letter);
        }
    }

    /// Eliminate every letter at once (the "exclude all" board action)
    pub fn exclude_all(&mut self) {
        self.available.clear();
        for slot in &mut self.known {
            *slot = None;
        }
        for set in &mut self.unsure {
            set.clear();
        }
    }

    /// Reset to the initial state: full alphabet available, nothing known
    pub fn reset(&mut self, alphabet: &Alphabet) {
        self.available = alphabet.letters().collect();
        for slot in &mut self.known {
            *slot = None;
        }
        for set in &mut self.unsure {
            set.clear();
        }
    }

    /// Count of currently available letters
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AlphabetVariant;

    fn fresh() -> (Alphabet, LetterConstraints) {
        let alphabet = Alphabet::new(AlphabetVariant::English);
        let constraints = LetterConstraints::new(&alphabet, 5);
        (alphabet, constraints)
    }

    #[test]
    fn starts_with_full_alphabet() {
        let (alphabet, constraints) = fresh();
        assert_eq!(constraints.available_count(), alphabet.len());
        for pos in 0..5 {
            assert_eq!(constraints.known_at(pos), None);
        }
    }

    #[test]
    fn add_known_pins_letter() {
        let (_, mut constraints) = fresh();
        constraints.add_known(1, 'R');
        assert_eq!(constraints.known_at(1), Some('R'));
        assert!(constraints.is_available('R'));
    }

    #[test]
    fn add_known_clears_unsure_at_same_position() {
        let (_, mut constraints) = fresh();
        constraints.add_unsure(2, 'A');
        constraints.add_known(2, 'A');
        assert!(!constraints.is_unsure_at(2, 'A'));
        assert_eq!(constraints.known_at(2), Some('A'));
    }

    #[test]
    fn add_unsure_refused_when_letter_pinned_there() {
        let (_, mut constraints) = fresh();
        constraints.add_known(0, 'S');
        constraints.add_unsure(0, 'S');
        assert!(!constraints.is_unsure_at(0, 'S'));
        // Same letter unsure at a different position is fine.
        constraints.add_unsure(3, 'S');
        assert!(constraints.is_unsure_at(3, 'S'));
    }

    #[test]
    fn remove_available_purges_known_and_unsure() {
        let (_, mut constraints) = fresh();
        constraints.add_known(1, 'E');
        constraints.add_unsure(3, 'E');
        constraints.remove_available('E');
        assert!(!constraints.is_available('E'));
        assert_eq!(constraints.known_at(1), None);
        assert!(!constraints.is_unsure_at(3, 'E'));
    }

    #[test]
    fn restore_available_after_removal() {
        let (_, mut constraints) = fresh();
        constraints.remove_available('Q');
        assert!(!constraints.is_available('Q'));
        constraints.restore_available('Q');
        assert!(constraints.is_available('Q'));
    }

    #[test]
    fn exclude_all_empties_everything() {
        let (_, mut constraints) = fresh();
        constraints.add_known(0, 'C');
        constraints.add_unsure(1, 'R');
        constraints.exclude_all();
        assert_eq!(constraints.available_count(), 0);
        assert_eq!(constraints.known_at(0), None);
        assert!(!constraints.is_unsure_at(1, 'R'));
    }

    #[test]
    fn reset_restores_initial_state() {
        let (alphabet, mut constraints) = fresh();
        constraints.remove_available('Z');
        constraints.add_known(4, 'E');
        constraints.add_unsure(0, 'T');
        constraints.reset(&alphabet);
        assert_eq!(constraints.available_count(), alphabet.len());
        assert_eq!(constraints.known_at(4), None);
        assert!(!constraints.is_unsure_at(0, 'T'));
    }

    #[test]
    fn out_of_range_positions_are_ignored() {
        let (_, mut constraints) = fresh();
        constraints.add_known(9, 'A');
        constraints.add_unsure(9, 'B');
        constraints.remove_unsure(9, 'B');
        constraints.clear_known(9);
        assert_eq!(constraints.known_at(9), None);
        assert!(!constraints.is_unsure_at(9, 'B'));
    }
}
