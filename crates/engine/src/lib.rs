//! Engine module - per-player game requests over the core rules
//!
//! Each play type owns its collaborators (stores, word source, shape generator) and
//! runs one request as a load, apply, store cycle against them:
//!
//! - [`WordPlay`]: start a word game, submit guesses, award session points
//! - [`PackingPlay`]: deal, place and restart block-packing sessions
//! - [`PuzzlePlay`]: load chess puzzles and check moves
//!
//! Leaderboard submission needs no session state and is called directly through
//! [`core::submit_score`] and [`core::top_n`].
//!
//! All play types are `Send + Sync`; share one instance between threads behind an `Arc`.

pub mod error;
pub mod packing_play;
pub mod puzzle_play;
pub mod word_play;

pub use arcade_core as core;
pub use arcade_types as types;

pub use error::PlayError;
pub use packing_play::PackingPlay;
pub use puzzle_play::PuzzlePlay;
pub use word_play::{win_points, GuessResult, RejectReason, WordPlay, LOSS_PENALTY};
