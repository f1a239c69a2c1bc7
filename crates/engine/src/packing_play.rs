//! Block-packing requests over stored [`PuzzleSession`] values.
//!
//! Each request runs its load/apply/save cycle under the store's per-player lock, so
//! players never wait on each other. The shape generator is shared and only locked
//! while shapes are dealt. A finished session stays in the store until it is restarted,
//! so its final board and score remain readable.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::core::{EntityStore, PlacementReport, PuzzleSession, ShapeGenerator};
use crate::error::PlayError;

type SharedGenerator = Box<dyn ShapeGenerator + Send>;

pub struct PackingPlay {
    sessions: Arc<dyn EntityStore<PuzzleSession>>,
    generator: Mutex<SharedGenerator>,
    rows: u8,
    cols: u8,
}

impl PackingPlay {
    pub fn new(
        sessions: Arc<dyn EntityStore<PuzzleSession>>,
        generator: impl ShapeGenerator + Send + 'static,
        rows: u8,
        cols: u8,
    ) -> Self {
        Self {
            sessions,
            generator: Mutex::new(Box::new(generator)),
            rows,
            cols,
        }
    }

    fn generator(&self) -> MutexGuard<'_, SharedGenerator> {
        self.generator.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Deal a new session for `player`, replacing any previous one
    pub fn start(&self, player: &str) -> Result<PuzzleSession, PlayError> {
        let lock = self.sessions.entity_lock(player);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let session = PuzzleSession::new(self.rows, self.cols, self.generator().as_mut());
        self.sessions.save(player, session.clone())?;
        debug!(player, rows = self.rows, cols = self.cols, "block packing started");
        Ok(session)
    }

    pub fn place(
        &self,
        player: &str,
        slot: usize,
        row: i8,
        col: i8,
    ) -> Result<PlacementReport, PlayError> {
        let lock = self.sessions.entity_lock(player);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut session = self
            .sessions
            .load(player)?
            .ok_or_else(|| PlayError::no_active_game(player))?;

        let report = session.execute_placement(slot, row, col, self.generator().as_mut())?;
        self.sessions.save(player, session)?;

        if report.game_over {
            info!(player, score = report.score, "block packing finished");
        }
        Ok(report)
    }

    /// Reset the player's session in place (empty board, fresh tray, zero score)
    pub fn restart(&self, player: &str) -> Result<PuzzleSession, PlayError> {
        let lock = self.sessions.entity_lock(player);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let session = match self.sessions.load(player)? {
            Some(mut session) => {
                session.new_game(self.generator().as_mut());
                session
            }
            None => PuzzleSession::new(self.rows, self.cols, self.generator().as_mut()),
        };
        self.sessions.save(player, session.clone())?;
        Ok(session)
    }

    pub fn session(&self, player: &str) -> Result<Option<PuzzleSession>, PlayError> {
        Ok(self.sessions.load(player)?)
    }
}
