//! Session state owner
//!
//! One struct owns the board, the constraint store, the service
//! configuration, and the request gate, so every piece of mutable state has
//! exactly one home. All edits flow through here: anything that touches
//! committed history goes through the reconciler, and after each
//! constraint-relevant change the session can mint a fresh analysis request.

use crate::api::{Analysis, RequestToken, ResponseGate, SolverConfig, WordScore, request};
use crate::board::{Board, CommittedRow, RowScore, Settings, reconciler};
use crate::core::{Alphabet, LetterConstraints};
use crate::encode;
use log::{debug, info};
use std::fmt;

/// Rejected session edit
#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The addressed row has not been committed yet
    RowNotCommitted(usize),
    /// The current row already holds letters
    RowInProgress,
    /// A marking string did not cover the whole row
    MarkingLength { expected: usize, actual: usize },
    /// A marking symbol outside `G`, `Y`, `-`
    MarkingSymbol(char),
    /// A character outside the session's alphabet
    ForeignLetter(char),
    /// A word whose length does not match the board
    WordLength { expected: usize, actual: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowNotCommitted(row) => write!(f, "row {row} has not been committed"),
            Self::RowInProgress => write!(f, "the current row already holds letters"),
            Self::MarkingLength { expected, actual } => {
                write!(f, "marking has {actual} symbols, expected {expected}")
            }
            Self::MarkingSymbol(c) => write!(f, "unknown marking symbol '{c}' (use G, Y, or -)"),
            Self::ForeignLetter(c) => write!(f, "'{c}' is not a letter of this alphabet"),
            Self::WordLength { expected, actual } => {
                write!(f, "word has {actual} letters, expected {expected}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// What a successful commit asks the caller to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEffects {
    pub row: CommittedRow,
    /// Set when entered-word rating is on: fetch a score for this word and
    /// hand it back through `apply_row_score`.
    pub rate_word: Option<String>,
}

/// The assistant's full mutable state
pub struct Session {
    alphabet: Alphabet,
    board: Board,
    constraints: LetterConstraints,
    config: SolverConfig,
    base: String,
    gate: ResponseGate,
    analysis: Option<Analysis>,
}

impl Session {
    /// Create a session against a service at `base`
    ///
    /// The alphabet follows the configured word list; the board's hard-mode
    /// flag mirrors the service configuration.
    #[must_use]
    pub fn new(base: impl Into<String>, config: SolverConfig, attempts: usize) -> Self {
        let alphabet = Alphabet::new(config.word_list.alphabet_variant());
        let mut settings = Settings::new(attempts, config.word_length);
        settings.hard_mode = config.hard_mode;
        let board = Board::new(settings);
        let constraints = LetterConstraints::new(&alphabet, board.settings().word_length);
        Self {
            alphabet,
            board,
            constraints,
            config,
            base: base.into(),
            gate: ResponseGate::new(),
            analysis: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &LetterConstraints {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The analysis currently accepted for display, if any
    #[must_use]
    pub const fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Turn per-row rating of entered words on or off
    pub fn set_rate_entered_words(&mut self, on: bool) {
        self.board.settings_mut().rate_entered_words = on;
    }

    /// Type one letter at the cursor
    ///
    /// The character is normalized through the alphabet; anything foreign is
    /// ignored and reported as `false`.
    pub fn place_letter(&mut self, input: char) -> bool {
        let Some(letter) = self.alphabet.normalize(input) else {
            debug!("ignoring foreign character '{input}'");
            return false;
        };
        self.board.place_letter(letter);
        true
    }

    /// Delete backwards from the cursor, reconciling constraint state
    pub fn delete_letter(&mut self) {
        self.board.delete_letter(&mut self.constraints);
    }

    /// Commit the current row
    ///
    /// With a configured solution the committed row is auto-colored before
    /// returning. `None` when the row is not exactly full.
    pub fn commit_row(&mut self) -> Option<CommitEffects> {
        let committed = self.board.commit_row()?;
        if let Some(solution) = self.board.settings().solution.clone() {
            reconciler::auto_color_row(
                &self.board,
                &mut self.constraints,
                &solution,
                committed.index,
            );
        }
        let rate_word = self
            .board
            .settings()
            .rate_entered_words
            .then(|| committed.word.clone());
        Some(CommitEffects {
            row: committed,
            rate_word,
        })
    }

    /// Place a whole word into the current row and commit it
    ///
    /// # Errors
    /// Rejects words of the wrong length, words containing foreign
    /// characters, and placement onto a partially typed row.
    pub fn place_word(&mut self, word: &str) -> Result<(), SessionError> {
        let expected = self.board.settings().word_length;
        let normalized = self.normalize_word(word, expected)?;
        let row = self.board.cursor().attempt;
        if !self.board.place_word(&mut self.constraints, &normalized) {
            return Err(SessionError::RowInProgress);
        }
        if let Some(solution) = self.board.settings().solution.clone() {
            reconciler::auto_color_row(&self.board, &mut self.constraints, &solution, row);
        }
        Ok(())
    }

    /// Apply a manual marking string to a committed row
    ///
    /// One symbol per position: `G` pins the letter, `Y` marks it present but
    /// excluded here, `-` eliminates it from the available set.
    ///
    /// # Errors
    /// The row must be committed and the marking must cover every position
    /// with a recognized symbol.
    pub fn mark_row(&mut self, row: usize, markings: &str) -> Result<(), SessionError> {
        if row >= self.board.cursor().attempt {
            return Err(SessionError::RowNotCommitted(row));
        }
        let expected = self.board.settings().word_length;
        let symbols: Vec<char> = markings.chars().collect();
        if symbols.len() != expected {
            return Err(SessionError::MarkingLength {
                expected,
                actual: symbols.len(),
            });
        }
        for symbol in &symbols {
            if !matches!(symbol.to_ascii_uppercase(), 'G' | 'Y' | '-') {
                return Err(SessionError::MarkingSymbol(*symbol));
            }
        }
        for (position, symbol) in symbols.iter().enumerate() {
            let Some(letter) = self.board.cell(row, position) else {
                continue;
            };
            match symbol.to_ascii_uppercase() {
                'G' => self.constraints.add_known(position, letter),
                'Y' => self.constraints.add_unsure(position, letter),
                _ => self.constraints.remove_available(letter),
            }
        }
        Ok(())
    }

    /// Configure (or reconfigure) the known solution
    ///
    /// All constraint state is rebuilt: the store resets and every committed
    /// row is re-colored against the new solution.
    ///
    /// # Errors
    /// The solution must have the board's word length and use only letters of
    /// the session's alphabet.
    pub fn set_solution(&mut self, word: &str) -> Result<(), SessionError> {
        let expected = self.board.settings().word_length;
        let normalized = self.normalize_word(word, expected)?;
        let solution: Vec<char> = normalized.chars().collect();
        info!("solution configured, re-coloring {} rows", self.board.cursor().attempt);
        reconciler::recolor_all(&self.board, &mut self.constraints, &self.alphabet, &solution);
        self.board.settings_mut().solution = Some(solution);
        Ok(())
    }

    /// Throw away the grid and all constraint state
    ///
    /// Mode flags and any configured solution survive, matching the board
    /// reset; the displayed analysis is dropped.
    pub fn reset_board(&mut self, attempts: usize, word_length: usize) {
        self.board.reset(attempts, word_length);
        self.config.word_length = self.board.settings().word_length;
        self.constraints = LetterConstraints::new(&self.alphabet, self.config.word_length);
        self.analysis = None;
    }

    /// Eliminate every letter at once
    pub fn exclude_all(&mut self) {
        self.constraints.exclude_all();
    }

    /// The restriction string for the current constraint state
    #[must_use]
    pub fn restriction(&self) -> String {
        encode::restriction_string(&self.alphabet, &self.constraints)
    }

    /// Mint a tagged analysis request for the current state
    ///
    /// Issuing a new request invalidates every earlier token; a response for
    /// an older token will be refused by `accept_analysis`.
    pub fn analysis_request(&mut self) -> (RequestToken, String) {
        let token = self.gate.issue();
        let url = request::analysis_url(&self.base, &self.restriction(), &self.config);
        (token, url)
    }

    /// Accept an analysis response if it is still the newest one in flight
    ///
    /// Stale responses are discarded and leave the displayed analysis alone.
    pub fn accept_analysis(&mut self, token: RequestToken, analysis: Analysis) -> bool {
        if !self.gate.is_current(token) {
            debug!("discarding stale analysis response (token {})", token.value());
            return false;
        }
        self.analysis = Some(analysis);
        true
    }

    /// Cache a fetched per-row score on the board
    pub fn apply_row_score(&mut self, row: usize, score: &WordScore) {
        self.board.set_row_score(
            row,
            RowScore {
                fishing_score: score.fishing_score,
                remaining_words: score.remaining_words,
                entropy: score.entropy,
            },
        );
    }

    fn normalize_word(&self, word: &str, expected: usize) -> Result<String, SessionError> {
        let mut normalized = String::with_capacity(word.len());
        for input in word.chars() {
            let letter = self
                .alphabet
                .normalize(input)
                .ok_or(SessionError::ForeignLetter(input))?;
            normalized.push(letter);
        }
        let actual = normalized.chars().count();
        if actual != expected {
            return Err(SessionError::WordLength { expected, actual });
        }
        Ok(normalized)
    }
}
