//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every game rule and the leaderboard ranking logic.
//! It has **no dependencies** on UI, networking, or persistence, making it:
//!
//! - **Deterministic**: shape generation is injected, so a seeded or scripted generator
//!   replays identical block-packing games
//! - **Testable**: every rule is a plain method or function over owned state
//! - **Shareable**: engines hold no per-player state between calls; sessions are values
//!   the caller loads and stores
//!
//! # Module Structure
//!
//! - [`word`]: five-letter guess evaluation and the word game state machine
//! - [`board`]: block-packing grid with placement checks and row/column clearing
//! - [`shapes`]: polyomino catalog
//! - [`rng`]: injectable shape generators
//! - [`packing`]: block-packing session, tray handling and deadlock detection
//! - [`puzzle`]: chess-puzzle solution tracking
//! - [`ranking`]: best-score submission and top-N leaderboard views
//! - [`ports`]: collaborator traits (session store, account ledger, word source)
//!
//! # Example
//!
//! ```
//! use arcade_core::{PuzzleSession, ScriptedShapeGenerator, ShapeKind, WordGame, WordStatus};
//!
//! let mut game = WordGame::start("crane").unwrap();
//! game.submit_guess("crane").unwrap();
//! assert_eq!(game.status(), WordStatus::Won);
//!
//! let mut generator = ScriptedShapeGenerator::repeating(ShapeKind::Mono);
//! let mut session = PuzzleSession::new(8, 8, &mut generator);
//! let report = session.execute_placement(0, 0, 0, &mut generator).unwrap();
//! assert_eq!(report.lines_cleared, 0);
//! assert!(!session.is_over());
//! ```

pub mod board;
pub mod packing;
pub mod ports;
pub mod puzzle;
pub mod ranking;
pub mod rng;
pub mod shapes;
pub mod word;

pub use arcade_types as types;

// Re-export commonly used types for convenience
pub use board::{Grid, LinesCleared};
pub use packing::{has_any_placement, PlaceError, PlacementReport, PuzzleSession, Slot};
pub use ports::{AccountLedger, EntityStore, SessionStore, StoreError, WordSource};
pub use puzzle::{move_token, ChessPuzzle, MoveVerdict, PuzzleError, PuzzleTrainer};
pub use ranking::{rank, submit_score, top_n, PlayerScore, RankError, Submission};
pub use rng::{CatalogShapeGenerator, ScriptedShapeGenerator, ShapeGenerator};
pub use shapes::{Shape, ShapeKind};
pub use word::{evaluate, Guess, WordError, WordGame, WordStatus};
