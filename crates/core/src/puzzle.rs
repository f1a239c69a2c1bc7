//! Puzzle module - chess-puzzle solution tracking
//!
//! A [`ChessPuzzle`] carries its solution as an ordered list of move tokens
//! (from square, to square, optional promotion piece: `e2e4`, `e7e8q`) and a cursor
//! counting how many of them the player has found.
//!
//! [`PuzzleTrainer`] only tracks logical progress. It never looks at a board: a caller
//! that wants to let the player retry after a wrong move must undo its own board state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("no puzzle loaded")]
    NoPuzzleLoaded,
    #[error("puzzle already solved")]
    AlreadySolved,
}

impl PuzzleError {
    pub fn code(self) -> &'static str {
        match self {
            PuzzleError::NoPuzzleLoaded => "no_puzzle_loaded",
            PuzzleError::AlreadySolved => "already_solved",
        }
    }
}

/// Result of checking one move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum MoveVerdict {
    /// Right move, more to find
    CorrectMove { message: String, remaining: usize },
    /// Right move, and it was the last one
    PuzzleSolved,
    /// Wrong move; progress is kept
    IncorrectMove,
}

/// Build a move token from its parts, e.g. `("e7", "e8", Some('q'))` -> `e7e8q`
pub fn move_token(from: &str, to: &str, promotion: Option<char>) -> String {
    let mut token = String::with_capacity(from.len() + to.len() + 1);
    token.push_str(from);
    token.push_str(to);
    if let Some(piece) = promotion {
        token.extend(piece.to_lowercase());
    }
    token
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessPuzzle {
    id: String,
    fen: String,
    solution: Vec<String>,
    rating: u32,
    themes: BTreeSet<String>,
    cursor: usize,
}

impl ChessPuzzle {
    pub fn new(
        id: impl Into<String>,
        fen: impl Into<String>,
        solution: Vec<String>,
        rating: u32,
        themes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id: id.into(),
            fen: fen.into(),
            solution,
            rating,
            themes: themes.into_iter().collect(),
            cursor: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Starting position in FEN
    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn solution(&self) -> &[String] {
        &self.solution
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn themes(&self) -> &BTreeSet<String> {
        &self.themes
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The move the player is expected to find next
    pub fn next_expected(&self) -> Option<&str> {
        self.solution.get(self.cursor).map(String::as_str)
    }

    pub fn remaining(&self) -> usize {
        self.solution.len().saturating_sub(self.cursor)
    }

    pub fn is_solved(&self) -> bool {
        self.cursor >= self.solution.len()
    }
}

/// Holds the active puzzle for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleTrainer {
    active: Option<ChessPuzzle>,
}

impl PuzzleTrainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_puzzle(puzzle: ChessPuzzle) -> Self {
        let mut trainer = Self::new();
        trainer.set_puzzle(puzzle);
        trainer
    }

    pub fn active(&self) -> Option<&ChessPuzzle> {
        self.active.as_ref()
    }

    /// Replace the active puzzle; progress starts from zero
    pub fn set_puzzle(&mut self, mut puzzle: ChessPuzzle) {
        puzzle.cursor = 0;
        debug!(id = %puzzle.id, moves = puzzle.solution.len(), "puzzle loaded");
        self.active = Some(puzzle);
    }

    /// Rewind the active puzzle to its first move
    pub fn reset(&mut self) {
        if let Some(puzzle) = self.active.as_mut() {
            puzzle.cursor = 0;
        }
    }

    /// Compare `token` with the next solution move.
    ///
    /// Exact string comparison; a mismatch leaves the cursor where it was.
    pub fn check_move(&mut self, token: &str) -> Result<MoveVerdict, PuzzleError> {
        let puzzle = self.active.as_mut().ok_or(PuzzleError::NoPuzzleLoaded)?;
        let Some(expected) = puzzle.solution.get(puzzle.cursor) else {
            return Err(PuzzleError::AlreadySolved);
        };

        if expected != token {
            debug!(id = %puzzle.id, cursor = puzzle.cursor, token, "incorrect move");
            return Ok(MoveVerdict::IncorrectMove);
        }

        puzzle.cursor += 1;
        let remaining = puzzle.remaining();
        if remaining == 0 {
            info!(id = %puzzle.id, rating = puzzle.rating, "puzzle solved");
            return Ok(MoveVerdict::PuzzleSolved);
        }

        Ok(MoveVerdict::CorrectMove {
            message: format!("Correct! Keep going, {remaining} more to find."),
            remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(moves: &[&str]) -> ChessPuzzle {
        ChessPuzzle::new(
            "p1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            moves.iter().map(|m| m.to_string()).collect(),
            1500,
            ["opening".to_string()],
        )
    }

    #[test]
    fn test_no_puzzle_loaded() {
        let mut trainer = PuzzleTrainer::new();
        assert_eq!(trainer.check_move("e2e4"), Err(PuzzleError::NoPuzzleLoaded));
    }

    #[test]
    fn test_incorrect_move_keeps_cursor() {
        let mut trainer = PuzzleTrainer::with_puzzle(puzzle(&["e2e4", "e7e5", "g1f3"]));
        trainer.check_move("e2e4").unwrap();
        assert_eq!(trainer.check_move("d7d5"), Ok(MoveVerdict::IncorrectMove));
        assert_eq!(trainer.active().unwrap().cursor(), 1);
        assert_eq!(trainer.active().unwrap().next_expected(), Some("e7e5"));
    }

    #[test]
    fn test_reset_rewinds() {
        let mut trainer = PuzzleTrainer::with_puzzle(puzzle(&["e2e4", "e7e5"]));
        trainer.check_move("e2e4").unwrap();
        trainer.reset();
        assert_eq!(trainer.active().unwrap().cursor(), 0);
        assert!(matches!(
            trainer.check_move("e2e4"),
            Ok(MoveVerdict::CorrectMove { remaining: 1, .. })
        ));
    }

    #[test]
    fn test_set_puzzle_starts_at_zero() {
        let mut progressed = puzzle(&["e2e4", "e7e5"]);
        let mut trainer = PuzzleTrainer::with_puzzle(progressed.clone());
        trainer.check_move("e2e4").unwrap();
        progressed = trainer.active().unwrap().clone();
        assert_eq!(progressed.cursor(), 1);

        trainer.set_puzzle(progressed);
        assert_eq!(trainer.active().unwrap().cursor(), 0);
    }

    #[test]
    fn test_empty_solution_is_already_solved() {
        let mut trainer = PuzzleTrainer::with_puzzle(puzzle(&[]));
        assert_eq!(trainer.check_move("e2e4"), Err(PuzzleError::AlreadySolved));
    }

    #[test]
    fn test_move_token() {
        assert_eq!(move_token("e2", "e4", None), "e2e4");
        assert_eq!(move_token("e7", "e8", Some('Q')), "e7e8q");
    }
}
