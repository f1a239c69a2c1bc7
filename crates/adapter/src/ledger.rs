//! In-memory [`AccountLedger`].
//!
//! Accounts are keyed by name; each holds the best score per game. Raising a best score
//! compares and writes under the account's `DashMap` shard lock, so it is atomic per player.

use std::collections::BTreeMap;

use dashmap::DashMap;
use tracing::debug;

use crate::core::ports::{AccountLedger, StoreError};
use crate::core::ranking::PlayerScore;
use crate::types::GameId;

#[derive(Debug, Default)]
pub struct InMemoryAccountLedger {
    accounts: DashMap<String, BTreeMap<GameId, i64>>,
}

impl InMemoryAccountLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account with no scores. Returns false if the name is taken.
    pub fn register(&self, name: &str) -> bool {
        let mut created = false;
        self.accounts.entry(name.to_string()).or_insert_with(|| {
            created = true;
            BTreeMap::new()
        });
        if created {
            debug!(name, "account registered");
        }
        created
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn unknown(name: &str) -> StoreError {
    StoreError::Unavailable(format!("no account named {name}"))
}

impl AccountLedger for InMemoryAccountLedger {
    fn exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.accounts.contains_key(name))
    }

    fn best_scores(&self, name: &str) -> Result<BTreeMap<GameId, i64>, StoreError> {
        Ok(self
            .accounts
            .get(name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    fn set_best_score(&self, name: &str, game: GameId, value: i64) -> Result<(), StoreError> {
        let mut account = self.accounts.get_mut(name).ok_or_else(|| unknown(name))?;
        account.insert(game, value);
        Ok(())
    }

    fn raise_best_score(&self, name: &str, game: GameId, score: i64) -> Result<bool, StoreError> {
        let mut account = self.accounts.get_mut(name).ok_or_else(|| unknown(name))?;
        if score <= account.get(&game).copied().unwrap_or(0) {
            return Ok(false);
        }
        account.insert(game, score);
        Ok(true)
    }

    fn recorded_scores(&self, game: GameId) -> Result<Vec<PlayerScore>, StoreError> {
        Ok(self
            .accounts
            .iter()
            .filter_map(|entry| {
                entry
                    .value()
                    .get(&game)
                    .map(|&score| PlayerScore::new(entry.key().clone(), score))
            })
            .collect())
    }
}
