//! Guess grid state and constraint reconciliation
//!
//! The board owns the raw guess history (rows of cells plus a cursor) and the
//! per-session settings. Every edit that touches a cell with committed
//! history behind it goes through the reconciler so the derived letter
//! constraints stay consistent with the *entire* board, not just the edited
//! cell.

pub mod reconciler;
mod state;

pub use state::{Board, CommittedRow, Cursor, RowScore, Settings};
