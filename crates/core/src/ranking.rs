//! Ranking module - best-score bookkeeping and leaderboard views
//!
//! A submission only overwrites the stored best when it is strictly greater. The
//! comparison happens inside the ledger's atomic [`AccountLedger::raise_best_score`], so
//! two submissions for the same (player, game) cannot lose each other's update.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::ports::{AccountLedger, StoreError};
use crate::types::{GameId, LEADERBOARD_MAX};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("player not found: {0}")]
    PlayerNotFound(String),
    #[error("leaderboard limit must be positive, got {0}")]
    InvalidLimit(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RankError {
    pub fn code(&self) -> &'static str {
        match self {
            RankError::PlayerNotFound(_) => "player_not_found",
            RankError::InvalidLimit(_) => "invalid_limit",
            RankError::Store(err) => err.code(),
        }
    }
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub name: String,
    pub score: i64,
}

impl PlayerScore {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Outcome of [`submit_score`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub new_record: bool,
    pub game: GameId,
    pub leaderboard: Vec<PlayerScore>,
}

/// Sort descending by score and keep the first `limit` rows (capped at `LEADERBOARD_MAX`).
///
/// Equal scores are ordered by name so views are reproducible.
pub fn rank(mut entries: Vec<PlayerScore>, limit: usize) -> Vec<PlayerScore> {
    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    entries.truncate(limit.min(LEADERBOARD_MAX));
    entries
}

/// Ranked view of `game`. `limit` must be positive and is clamped to `LEADERBOARD_MAX`.
pub fn top_n(
    ledger: &dyn AccountLedger,
    game: GameId,
    limit: i64,
) -> Result<Vec<PlayerScore>, RankError> {
    if limit <= 0 {
        return Err(RankError::InvalidLimit(limit));
    }
    let limit = usize::try_from(limit).unwrap_or(LEADERBOARD_MAX).min(LEADERBOARD_MAX);
    Ok(rank(ledger.recorded_scores(game)?, limit))
}

/// Record `score` for `player` if it beats their best, then return the top `view_size`
/// rows of the ranked view (usually the configured leaderboard size).
pub fn submit_score(
    ledger: &dyn AccountLedger,
    player: &str,
    game: GameId,
    score: i64,
    view_size: usize,
) -> Result<Submission, RankError> {
    if !ledger.exists(player)? {
        return Err(RankError::PlayerNotFound(player.to_string()));
    }

    let new_record = ledger.raise_best_score(player, game, score)?;
    if new_record {
        info!(player, game = %game, score, "new best score");
    } else {
        debug!(player, game = %game, score, "score not above best, not recorded");
    }

    let limit = i64::try_from(view_size).unwrap_or(i64::MAX);
    let leaderboard = top_n(ledger, game, limit)?;
    Ok(Submission {
        new_record,
        game,
        leaderboard,
    })
}
