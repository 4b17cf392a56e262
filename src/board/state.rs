//! Board state: grid, cursor, and session settings

use super::reconciler;
use crate::core::LetterConstraints;

/// Single-digit position indices are a hard limit of the restriction
/// encoding, so word length never exceeds this.
pub const MAX_WORD_LENGTH: usize = 9;

/// Per-session settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub word_length: usize,
    pub attempts: usize,
    pub hard_mode: bool,
    pub rate_entered_words: bool,
    /// When set, committed rows are auto-colored against this word.
    pub solution: Option<Vec<char>>,
}

impl Settings {
    /// Create settings, clamping word length to the encodable range
    #[must_use]
    pub fn new(attempts: usize, word_length: usize) -> Self {
        Self {
            word_length: word_length.clamp(1, MAX_WORD_LENGTH),
            attempts: attempts.max(1),
            hard_mode: false,
            rate_entered_words: false,
            solution: None,
        }
    }
}

/// Cursor into the grid
///
/// `position == word_length` means the row is full and awaiting commit;
/// `attempt == attempts` means every row has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub attempt: usize,
    pub position: usize,
}

/// Cached per-row score, displayed next to a committed row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowScore {
    pub fishing_score: f64,
    pub remaining_words: f64,
    pub entropy: f64,
}

/// A row that was just committed by `commit_row`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedRow {
    pub index: usize,
    pub word: String,
}

/// The guess grid
///
/// Rows strictly before the cursor's attempt are *committed*: their cells are
/// only ever mutated through the reconciler, never directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: Vec<Vec<Option<char>>>,
    cursor: Cursor,
    settings: Settings,
    row_scores: Vec<Option<RowScore>>,
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let rows = vec![vec![None; settings.word_length]; settings.attempts];
        let row_scores = vec![None; settings.attempts];
        Self {
            rows,
            cursor: Cursor {
                attempt: 0,
                position: 0,
            },
            settings,
            row_scores,
        }
    }

    /// Throw away the grid and start over with new dimensions
    ///
    /// Mode flags and any configured solution survive the reset; the caller
    /// resets the constraint store in the same motion.
    pub fn reset(&mut self, attempts: usize, word_length: usize) {
        self.settings.attempts = attempts.max(1);
        self.settings.word_length = word_length.clamp(1, MAX_WORD_LENGTH);
        self.rows = vec![vec![None; self.settings.word_length]; self.settings.attempts];
        self.row_scores = vec![None; self.settings.attempts];
        self.cursor = Cursor {
            attempt: 0,
            position: 0,
        };
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Cell content, or `None` when empty or out of range
    #[inline]
    #[must_use]
    pub fn cell(&self, attempt: usize, position: usize) -> Option<char> {
        self.rows
            .get(attempt)
            .and_then(|row| row.get(position))
            .copied()
            .flatten()
    }

    /// The word in a row, skipping empty cells
    #[must_use]
    pub fn row_word(&self, attempt: usize) -> String {
        self.rows[attempt].iter().flatten().collect()
    }

    /// Cached score for a row, if one was fetched
    #[must_use]
    pub fn row_score(&self, attempt: usize) -> Option<RowScore> {
        self.row_scores.get(attempt).copied().flatten()
    }

    pub fn set_row_score(&mut self, attempt: usize, score: RowScore) {
        if let Some(slot) = self.row_scores.get_mut(attempt) {
            *slot = Some(score);
        }
    }

    /// Whether the current row holds exactly `word_length` letters
    #[inline]
    #[must_use]
    pub fn row_full(&self) -> bool {
        self.cursor.position == self.settings.word_length
    }

    /// Whether every row has been committed
    #[inline]
    #[must_use]
    pub fn complete(&self) -> bool {
        self.cursor.attempt >= self.settings.attempts
    }

    /// Write a letter at the cursor and advance one position
    ///
    /// Silently ignored when the row is already full or the board complete.
    pub fn place_letter(&mut self, letter: char) {
        if self.complete() || self.row_full() {
            return;
        }
        self.rows[self.cursor.attempt][self.cursor.position] = Some(letter);
        self.cursor.position += 1;
    }

    /// Delete backwards from the cursor
    ///
    /// At the start of a row (other than the first), the cursor moves back to
    /// the end of the previous row and that row's cached score is dropped; no
    /// cell changes. Otherwise the cell before the cursor is cleared through
    /// the reconciler. No-op at the very first cell.
    pub fn delete_letter(&mut self, constraints: &mut LetterConstraints) {
        if self.cursor.position == 0 {
            if self.cursor.attempt == 0 {
                return;
            }
            self.cursor.attempt -= 1;
            self.cursor.position = self.settings.word_length;
            self.row_scores[self.cursor.attempt] = None;
            return;
        }
        let attempt = self.cursor.attempt;
        let position = self.cursor.position - 1;
        reconciler::clear_position(&*self, constraints, attempt, position, None);
        self.rows[attempt][position] = None;
        self.cursor.position = position;
    }

    /// Commit the current row ("enter")
    ///
    /// Allowed only when the row is exactly full. Advances the cursor to the
    /// next attempt at position 0; the returned row tells the caller which
    /// side effects (auto-coloring, row scoring) to run.
    pub fn commit_row(&mut self) -> Option<CommittedRow> {
        if self.complete() || !self.row_full() {
            return None;
        }
        let index = self.cursor.attempt;
        let word = self.row_word(index);
        self.cursor = Cursor {
            attempt: index + 1,
            position: 0,
        };
        Some(CommittedRow { index, word })
    }

    /// Place a whole word into the current row
    ///
    /// No-op unless the cursor is at the start of a row (a partially typed
    /// row is never overwritten). Each cell is reconciled as an overwrite
    /// before being written. The cursor then moves to the next row, capped at
    /// the last configured attempt. Word-length mismatches are the caller's
    /// responsibility; extra characters are dropped.
    pub fn place_word(&mut self, constraints: &mut LetterConstraints, word: &str) -> bool {
        if self.cursor.position != 0 || self.complete() {
            return false;
        }
        let attempt = self.cursor.attempt;
        for (position, letter) in word.chars().take(self.settings.word_length).enumerate() {
            reconciler::clear_position(&*self, constraints, attempt, position, Some(letter));
            self.rows[attempt][position] = Some(letter);
        }
        self.cursor = if attempt + 1 < self.settings.attempts {
            Cursor {
                attempt: attempt + 1,
                position: 0,
            }
        } else {
            Cursor {
                attempt,
                position: self.settings.word_length,
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, AlphabetVariant};

    fn setup() -> (Board, LetterConstraints) {
        let alphabet = Alphabet::new(AlphabetVariant::English);
        let board = Board::new(Settings::new(6, 5));
        let constraints = LetterConstraints::new(&alphabet, 5);
        (board, constraints)
    }

    #[test]
    fn place_letter_advances_cursor() {
        let (mut board, _) = setup();
        board.place_letter('C');
        board.place_letter('R');
        assert_eq!(board.cursor(), Cursor { attempt: 0, position: 2 });
        assert_eq!(board.cell(0, 0), Some('C'));
        assert_eq!(board.cell(0, 1), Some('R'));
    }

    #[test]
    fn place_letter_ignored_when_row_full() {
        let (mut board, _) = setup();
        for c in "CRANE".chars() {
            board.place_letter(c);
        }
        board.place_letter('X');
        assert_eq!(board.cursor(), Cursor { attempt: 0, position: 5 });
        assert_eq!(board.cell(0, 4), Some('E'));
    }

    #[test]
    fn commit_requires_full_row() {
        let (mut board, _) = setup();
        board.place_letter('C');
        assert!(board.commit_row().is_none());
        for c in "RANE".chars() {
            board.place_letter(c);
        }
        let committed = board.commit_row().unwrap();
        assert_eq!(committed.index, 0);
        assert_eq!(committed.word, "CRANE");
        assert_eq!(board.cursor(), Cursor { attempt: 1, position: 0 });
    }

    #[test]
    fn delete_at_first_cell_is_noop() {
        // Scenario: deleting at the very first cell leaves everything alone.
        let (mut board, mut constraints) = setup();
        let before = board.clone();
        board.delete_letter(&mut constraints);
        assert_eq!(board, before);
    }

    #[test]
    fn delete_clears_previous_cell() {
        let (mut board, mut constraints) = setup();
        board.place_letter('C');
        board.place_letter('R');
        board.delete_letter(&mut constraints);
        assert_eq!(board.cell(0, 1), None);
        assert_eq!(board.cursor(), Cursor { attempt: 0, position: 1 });
    }

    #[test]
    fn delete_at_row_start_reopens_previous_row() {
        let (mut board, mut constraints) = setup();
        for c in "CRANE".chars() {
            board.place_letter(c);
        }
        board.commit_row();
        board.set_row_score(
            0,
            RowScore {
                fishing_score: 0.5,
                remaining_words: 12.0,
                entropy: 4.2,
            },
        );
        board.delete_letter(&mut constraints);
        assert_eq!(board.cursor(), Cursor { attempt: 0, position: 5 });
        assert_eq!(board.row_score(0), None);
        // Cells themselves are untouched by the row change.
        assert_eq!(board.row_word(0), "CRANE");
    }

    #[test]
    fn place_word_fills_row_and_advances() {
        // Scenario: placeWord on an empty row fills all cells and moves on.
        let (mut board, mut constraints) = setup();
        assert!(board.place_word(&mut constraints, "ROBOT"));
        assert_eq!(board.row_word(0), "ROBOT");
        assert_eq!(board.cursor(), Cursor { attempt: 1, position: 0 });
    }

    #[test]
    fn place_word_refused_mid_row() {
        let (mut board, mut constraints) = setup();
        board.place_letter('A');
        assert!(!board.place_word(&mut constraints, "ROBOT"));
        assert_eq!(board.row_word(0), "A");
    }

    #[test]
    fn place_word_caps_at_last_attempt() {
        let (mut board, mut constraints) = setup();
        for _ in 0..5 {
            assert!(board.place_word(&mut constraints, "ROBOT"));
        }
        assert_eq!(board.cursor(), Cursor { attempt: 5, position: 0 });
        // Final row: cursor stays on the row, parked at its end.
        assert!(board.place_word(&mut constraints, "ROBOT"));
        assert_eq!(board.cursor(), Cursor { attempt: 5, position: 5 });
        assert!(!board.place_word(&mut constraints, "ROBOT"));
    }

    #[test]
    fn commit_on_last_row_completes_board() {
        let (mut board, _) = setup();
        board.reset(1, 5);
        for c in "CRANE".chars() {
            board.place_letter(c);
        }
        assert!(board.commit_row().is_some());
        assert!(board.complete());
        // No further edits land anywhere.
        board.place_letter('X');
        assert_eq!(board.cell(0, 0), Some('C'));
    }

    #[test]
    fn delete_after_board_complete_reopens_last_row() {
        let (mut board, mut constraints) = setup();
        board.reset(1, 5);
        for c in "CRANE".chars() {
            board.place_letter(c);
        }
        board.commit_row();
        board.delete_letter(&mut constraints);
        assert_eq!(board.cursor(), Cursor { attempt: 0, position: 5 });
    }

    #[test]
    fn settings_clamp_word_length() {
        let settings = Settings::new(6, 12);
        assert_eq!(settings.word_length, MAX_WORD_LENGTH);
        let settings = Settings::new(0, 0);
        assert_eq!(settings.attempts, 1);
        assert_eq!(settings.word_length, 1);
    }

    #[test]
    fn place_word_drops_extra_characters() {
        let (mut board, mut constraints) = setup();
        assert!(board.place_word(&mut constraints, "ROBOTS"));
        assert_eq!(board.row_word(0), "ROBOT");
    }
}
