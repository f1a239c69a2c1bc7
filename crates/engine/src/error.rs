use thiserror::Error;

use crate::core::{PlaceError, PuzzleError, StoreError, WordError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("no active game for {player}")]
    NoActiveGame { player: String },
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Place(#[from] PlaceError),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PlayError {
    pub fn no_active_game(player: &str) -> Self {
        Self::NoActiveGame {
            player: player.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PlayError::NoActiveGame { .. } => "no_active_game",
            PlayError::Word(err) => err.code(),
            PlayError::Place(err) => err.code(),
            PlayError::Puzzle(err) => err.code(),
            PlayError::Store(err) => err.code(),
        }
    }
}
