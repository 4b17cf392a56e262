//! Constraint reconciliation for cell edits
//!
//! `clear_position` undoes exactly the inferences that were only true because
//! of the letter currently in a cell, while leaving inferences still
//! supported by other committed rows alone. It rescans the bounded committed
//! history on every edit rather than keeping incremental occurrence counts;
//! the board never exceeds a handful of rows, so the rescan is cheap and the
//! code stays obviously correct.

use super::Board;
use crate::core::{Alphabet, LetterConstraints};
use log::debug;

/// Reconcile the constraint store before a cell is overwritten or cleared
///
/// `attempt`/`position` address the cell being edited; `replacement` is the
/// letter about to be written (`None` for a plain delete). The caller writes
/// the cell afterwards; this function only touches the constraint store.
///
/// Policy, in order:
/// 1. If the cell is empty or already holds the replacement, do nothing.
/// 2. If any committed row before `attempt` has the same letter in the same
///    column, keep the known/unsure state for that column.
/// 3. Otherwise drop the letter's unsure mark at this position, and unpin it
///    here if it was pinned.
/// 4. If any committed row before `attempt` still contains the letter
///    anywhere, keep its availability as is.
/// 5. Otherwise restore the letter to the available set.
pub fn clear_position(
    board: &Board,
    constraints: &mut LetterConstraints,
    attempt: usize,
    position: usize,
    replacement: Option<char>,
) {
    let Some(old) = board.cell(attempt, position) else {
        return;
    };
    if replacement == Some(old) {
        return;
    }

    // Another committed row justifies the per-position state for this column.
    let same_column_elsewhere =
        (0..attempt).any(|row| board.cell(row, position) == Some(old));
    if same_column_elsewhere {
        debug!("keeping column {position} state for {old}: justified by an earlier row");
        return;
    }

    constraints.remove_unsure(position, old);
    if constraints.known_at(position) == Some(old) {
        constraints.clear_known(position);
    }

    // The letter may still be proven viable by an occurrence anywhere else
    // on the committed board.
    let word_length = board.settings().word_length;
    let anywhere_elsewhere = (0..attempt)
        .any(|row| (0..word_length).any(|col| board.cell(row, col) == Some(old)));
    if anywhere_elsewhere {
        debug!("keeping availability of {old}: still present in committed history");
        return;
    }

    if !constraints.is_available(old) {
        debug!("restoring availability of {old}");
        constraints.restore_available(old);
    }
}

/// Color one committed row against a known solution
///
/// Per position: an exact match is pinned, a letter present elsewhere in the
/// solution becomes unsure at that position, and a letter absent from the
/// solution is removed from the available set.
pub fn auto_color_row(
    board: &Board,
    constraints: &mut LetterConstraints,
    solution: &[char],
    row: usize,
) {
    for position in 0..board.settings().word_length {
        let Some(guessed) = board.cell(row, position) else {
            continue;
        };
        if solution.get(position) == Some(&guessed) {
            constraints.add_known(position, guessed);
        } else if solution.contains(&guessed) {
            constraints.add_unsure(position, guessed);
        } else {
            constraints.remove_available(guessed);
        }
    }
}

/// Re-color the whole committed history against a (re)configured solution
///
/// Constraint state is reset to initial first, then every committed row is
/// replayed in order. A full final row counts as committed here: placing a
/// word on the last attempt parks the cursor at the row end instead of
/// advancing past it, and that row's coloring must survive a re-color.
pub fn recolor_all(
    board: &Board,
    constraints: &mut LetterConstraints,
    alphabet: &Alphabet,
    solution: &[char],
) {
    constraints.reset(alphabet);
    let cursor = board.cursor();
    let mut rows = cursor.attempt;
    if cursor.attempt + 1 == board.settings().attempts && board.row_full() {
        rows += 1;
    }
    for row in 0..rows {
        auto_color_row(board, constraints, solution, row);
    }
}
