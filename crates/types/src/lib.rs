//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by every game engine.
//! All types are plain data with no behaviour beyond parsing and formatting, making them
//! usable in any context (engines, stores, the self-play runner).
//!
//! # Word game
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WORD_LENGTH` | 5 | Letters in every answer and guess |
//! | `MAX_ATTEMPTS` | 6 | Guesses allowed before the game is lost |
//!
//! # Block packing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_ROWS` | 8 | Rows on a default board |
//! | `DEFAULT_GRID_COLS` | 8 | Columns on a default board |
//! | `MAX_GRID_DIM` | 16 | Largest board side accepted |
//! | `TRAY_SLOTS` | 3 | Shapes offered at once |
//! | `POINTS_PER_LINE` | 10 | Score per cleared row or column |
//!
//! # Leaderboard
//!
//! - `LEADERBOARD_MAX`: 100 - hard cap on any ranked view
//! - `DEFAULT_LEADERBOARD_SIZE`: 10 - view size returned with a score submission
//!
//! # Examples
//!
//! ```
//! use arcade_types::{Color, GameId, LetterOutcome, WORD_LENGTH};
//!
//! assert_eq!(GameId::from_str("wordle"), Some(GameId::Wordle));
//! assert_eq!(GameId::BlockPacking.as_str(), "block_packing");
//!
//! assert_eq!(Color::from_str("Cyan"), Some(Color::Cyan));
//! assert_eq!(LetterOutcome::Present.symbol(), '?');
//! assert_eq!(WORD_LENGTH, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Letters in every answer and guess
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per word game
pub const MAX_ATTEMPTS: usize = 6;

/// Default board height for block packing
pub const DEFAULT_GRID_ROWS: u8 = 8;

/// Default board width for block packing
pub const DEFAULT_GRID_COLS: u8 = 8;

/// Largest supported board side (rows or columns)
pub const MAX_GRID_DIM: u8 = 16;

/// Number of shapes offered in the tray at once
pub const TRAY_SLOTS: usize = 3;

/// Points awarded per cleared row or column
pub const POINTS_PER_LINE: u32 = 10;

/// Upper bound on the size of any ranked leaderboard view
pub const LEADERBOARD_MAX: usize = 100;

/// Size of the ranked view returned alongside a score submission
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Largest number of cells in a catalog shape
pub const MAX_SHAPE_CELLS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(WORD_LENGTH, 5);
        assert_eq!(MAX_ATTEMPTS, 6);
        assert_eq!(TRAY_SLOTS, 3);
        assert_eq!(POINTS_PER_LINE, 10);
        assert_eq!(LEADERBOARD_MAX, 100);
        assert!(DEFAULT_LEADERBOARD_SIZE <= LEADERBOARD_MAX);
    }

    #[test]
    fn game_id_round_trips_through_str() {
        for game in GameId::ALL {
            assert_eq!(GameId::from_str(game.as_str()), Some(game));
        }
        assert_eq!(GameId::from_str("chess"), Some(GameId::ChessPuzzle));
        assert_eq!(GameId::from_str("pinball"), None);
    }

    #[test]
    fn outcome_serializes_lowercase() {
        assert_eq!(LetterOutcome::Correct.as_str(), "correct");
        assert_eq!(LetterOutcome::Absent.symbol(), '.');
    }
}

/// Colors a block-packing shape can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl Color {
    /// Every color, in catalog order
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Cyan,
        Color::Blue,
        Color::Purple,
    ];

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "orange" => Some(Color::Orange),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "cyan" => Some(Color::Cyan),
            "blue" => Some(Color::Blue),
            "purple" => Some(Color::Purple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Purple => "purple",
        }
    }
}

/// A cell on a block-packing grid
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a shape of that color
pub type Cell = Option<Color>;

/// Per-letter verdict for a word guess
///
/// - **Correct**: right letter, right position
/// - **Present**: letter occurs in the answer at an unmatched position
/// - **Absent**: letter is not (or no longer) available in the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterOutcome {
    Correct,
    Present,
    Absent,
}

impl LetterOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LetterOutcome::Correct => "correct",
            LetterOutcome::Present => "present",
            LetterOutcome::Absent => "absent",
        }
    }

    /// Single-character form used in logs (`=` correct, `?` present, `.` absent)
    pub fn symbol(&self) -> char {
        match self {
            LetterOutcome::Correct => '=',
            LetterOutcome::Present => '?',
            LetterOutcome::Absent => '.',
        }
    }
}

/// Games hosted by the platform, used as leaderboard keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameId {
    Wordle,
    BlockPacking,
    ChessPuzzle,
}

impl GameId {
    pub const ALL: [GameId; 3] = [GameId::Wordle, GameId::BlockPacking, GameId::ChessPuzzle];

    /// Parse a game identifier (case-insensitive, accepts short aliases)
    ///
    /// # Examples
    ///
    /// ```
    /// use arcade_types::GameId;
    ///
    /// assert_eq!(GameId::from_str("blocks"), Some(GameId::BlockPacking));
    /// assert_eq!(GameId::from_str("CHESS_PUZZLE"), Some(GameId::ChessPuzzle));
    /// assert_eq!(GameId::from_str("pong"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wordle" | "word" => Some(GameId::Wordle),
            "block_packing" | "blocks" => Some(GameId::BlockPacking),
            "chess_puzzle" | "chess" => Some(GameId::ChessPuzzle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Wordle => "wordle",
            GameId::BlockPacking => "block_packing",
            GameId::ChessPuzzle => "chess_puzzle",
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
