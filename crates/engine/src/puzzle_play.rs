//! Chess-puzzle requests over stored [`PuzzleTrainer`] values, each one serialized by
//! the store's per-player lock.

use std::sync::{Arc, PoisonError};

use tracing::debug;

use crate::core::{ChessPuzzle, EntityStore, MoveVerdict, PuzzleError, PuzzleTrainer};
use crate::error::PlayError;

pub struct PuzzlePlay {
    trainers: Arc<dyn EntityStore<PuzzleTrainer>>,
}

impl PuzzlePlay {
    pub fn new(trainers: Arc<dyn EntityStore<PuzzleTrainer>>) -> Self {
        Self { trainers }
    }

    /// Make `puzzle` the player's active puzzle, starting from its first move
    pub fn load_puzzle(&self, player: &str, puzzle: ChessPuzzle) -> Result<(), PlayError> {
        let lock = self.trainers.entity_lock(player);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut trainer = self.trainers.load(player)?.unwrap_or_default();
        trainer.set_puzzle(puzzle);
        self.trainers.save(player, trainer)?;
        Ok(())
    }

    pub fn check_move(&self, player: &str, token: &str) -> Result<MoveVerdict, PlayError> {
        let lock = self.trainers.entity_lock(player);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut trainer = self
            .trainers
            .load(player)?
            .ok_or(PuzzleError::NoPuzzleLoaded)?;

        let verdict = trainer.check_move(token)?;
        if verdict != MoveVerdict::IncorrectMove {
            self.trainers.save(player, trainer)?;
        }
        debug!(player, token, ?verdict, "move checked");
        Ok(verdict)
    }

    /// Rewind the player's active puzzle; a no-op when none is loaded
    pub fn reset(&self, player: &str) -> Result<(), PlayError> {
        let lock = self.trainers.entity_lock(player);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(mut trainer) = self.trainers.load(player)? {
            trainer.reset();
            self.trainers.save(player, trainer)?;
        }
        Ok(())
    }

    pub fn active(&self, player: &str) -> Result<Option<ChessPuzzle>, PlayError> {
        Ok(self
            .trainers
            .load(player)?
            .and_then(|trainer| trainer.active().cloned()))
    }
}
