//! In-memory [`SessionStore`] backed by `DashMap`.
//!
//! Games, scores and per-player locks live in separate maps, so a long-running
//! mutation on one player's game never blocks another player's score lookup.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing::debug;

use crate::core::ports::{SessionStore, StoreError};
use crate::core::WordGame;

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    games: DashMap<String, WordGame>,
    scores: DashMap<String, i64>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of in-flight games
    pub fn active_games(&self) -> usize {
        self.games.len()
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, player: &str, game: WordGame) -> Result<(), StoreError> {
        self.games.insert(player.to_string(), game);
        Ok(())
    }

    fn load(&self, player: &str) -> Result<Option<WordGame>, StoreError> {
        Ok(self.games.get(player).map(|entry| entry.value().clone()))
    }

    fn remove(&self, player: &str) -> Result<(), StoreError> {
        self.games.remove(player);
        Ok(())
    }

    fn get_score(&self, player: &str) -> Result<i64, StoreError> {
        Ok(self.scores.get(player).map(|entry| *entry).unwrap_or(0))
    }

    fn add_score(&self, player: &str, delta: i64) -> Result<i64, StoreError> {
        let mut entry = self.scores.entry(player.to_string()).or_insert(0);
        *entry = entry.saturating_add(delta).max(0);
        debug!(player, delta, total = *entry, "session score updated");
        Ok(*entry)
    }

    fn set_score(&self, player: &str, value: i64) -> Result<(), StoreError> {
        self.scores.insert(player.to_string(), value);
        Ok(())
    }

    fn session_lock(&self, player: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(player.to_string())
            .or_default()
            .value()
            .clone()
    }
}
