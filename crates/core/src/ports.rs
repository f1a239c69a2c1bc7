//! Ports module - collaborator contracts the engines are handed
//!
//! Implementations live outside the core (see the adapter crate for in-memory ones).
//! Every method is synchronous; failures surface as [`StoreError`].

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::ranking::{self, PlayerScore};
use crate::types::GameId;
use crate::word::WordGame;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Unavailable(_) => "store_unavailable",
        }
    }
}

/// Dictionary of playable words
#[cfg_attr(test, mockall::automock)]
pub trait WordSource: Send + Sync {
    fn is_valid_word(&self, token: &str) -> bool;
    fn pick_random_answer(&self) -> String;
    fn list_all_answers(&self) -> Vec<String>;
}

/// In-flight word games plus each player's running session score
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn save(&self, player: &str, game: WordGame) -> Result<(), StoreError>;
    fn load(&self, player: &str) -> Result<Option<WordGame>, StoreError>;
    fn remove(&self, player: &str) -> Result<(), StoreError>;

    fn get_score(&self, player: &str) -> Result<i64, StoreError>;
    /// Add `delta`, flooring the result at 0. Returns the new score.
    fn add_score(&self, player: &str, delta: i64) -> Result<i64, StoreError>;
    fn set_score(&self, player: &str, value: i64) -> Result<(), StoreError>;

    /// Guard serializing mutations of `player`'s game; one per key
    fn session_lock(&self, player: &str) -> Arc<Mutex<()>>;
}

/// Registered players and their best score per game
#[cfg_attr(test, mockall::automock)]
pub trait AccountLedger: Send + Sync {
    fn exists(&self, name: &str) -> Result<bool, StoreError>;
    fn best_scores(&self, name: &str) -> Result<BTreeMap<GameId, i64>, StoreError>;
    fn set_best_score(&self, name: &str, game: GameId, value: i64) -> Result<(), StoreError>;

    /// Store `score` as the best for (name, game) if it is strictly greater than the
    /// current best (a missing score counts as 0). The compare and the write are one
    /// atomic step. Returns whether the write happened.
    fn raise_best_score(&self, name: &str, game: GameId, score: i64) -> Result<bool, StoreError>;

    /// Every player with a score for `game`, in no particular order
    fn recorded_scores(&self, game: GameId) -> Result<Vec<PlayerScore>, StoreError>;

    /// Highest `limit` scores for `game`
    fn top_players(&self, game: GameId, limit: usize) -> Result<Vec<PlayerScore>, StoreError> {
        Ok(ranking::rank(self.recorded_scores(game)?, limit))
    }
}

/// Keyed storage for one kind of per-player entity
pub trait EntityStore<T>: Send + Sync {
    fn load(&self, player: &str) -> Result<Option<T>, StoreError>;
    fn save(&self, player: &str, entity: T) -> Result<(), StoreError>;
    fn remove(&self, player: &str) -> Result<(), StoreError>;

    /// Guard serializing load/apply/save cycles on `player`'s entity; one per key
    fn entity_lock(&self, player: &str) -> Arc<Mutex<()>>;
}
