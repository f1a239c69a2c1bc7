//! Packing module - block-packing session rules
//!
//! A [`PuzzleSession`] owns one grid, a tray of [`TRAY_SLOTS`] slots, a score and an
//! `over` flag. Each placement:
//!
//! 1. checks the session is live, the slot holds a shape and the shape fits
//! 2. writes the shape, clears full rows then full columns
//! 3. scores `POINTS_PER_LINE` per cleared line and empties the slot
//! 4. refills the whole tray once every slot is empty
//! 5. ends the game if no remaining shape fits anywhere
//!
//! The session holds no generator; callers pass one in, so the same engine code can
//! serve every player.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::board::Grid;
use crate::rng::ShapeGenerator;
use crate::shapes::Shape;
use crate::types::{POINTS_PER_LINE, TRAY_SLOTS};

/// One tray position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "shape", rename_all = "snake_case")]
pub enum Slot {
    Occupied(Shape),
    Empty,
}

impl Slot {
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            Slot::Occupied(shape) => Some(shape),
            Slot::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("game is over")]
    GameOver,
    #[error("slot {0} is out of range or empty")]
    InvalidSlot(usize),
    #[error("shape does not fit at row {row}, col {col}")]
    PlacementRejected { row: i8, col: i8 },
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game_over",
            PlaceError::InvalidSlot(_) => "invalid_slot",
            PlaceError::PlacementRejected { .. } => "placement_rejected",
        }
    }
}

/// What a successful placement did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub lines_cleared: u32,
    pub points: u32,
    pub score: u32,
    pub tray_refilled: bool,
    pub game_over: bool,
}

/// Whether any shape left in `tray` fits anywhere on `grid`.
///
/// Exhaustive over (occupied slots x grid cells); empty slots are skipped.
pub fn has_any_placement(grid: &Grid, tray: &[Slot]) -> bool {
    tray.iter().filter_map(Slot::shape).any(|shape| {
        (0..grid.rows() as i8)
            .any(|row| (0..grid.cols() as i8).any(|col| grid.can_place(shape, row, col)))
    })
}

/// Block-packing game state for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSession {
    grid: Grid,
    tray: [Slot; TRAY_SLOTS],
    score: u32,
    over: bool,
}

impl PuzzleSession {
    /// Empty `rows` x `cols` board with a freshly dealt tray
    pub fn new(rows: u8, cols: u8, generator: &mut dyn ShapeGenerator) -> Self {
        let mut session = Self {
            grid: Grid::new(rows, cols),
            tray: std::array::from_fn(|_| Slot::Empty),
            score: 0,
            over: false,
        };
        session.new_game(generator);
        session
    }

    /// Resume from an existing grid and tray. `over` is derived from the deadlock search.
    pub fn from_parts(grid: Grid, tray: [Slot; TRAY_SLOTS], score: u32) -> Self {
        let over = !has_any_placement(&grid, &tray);
        Self {
            grid,
            tray,
            score,
            over,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tray(&self) -> &[Slot; TRAY_SLOTS] {
        &self.tray
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Place the shape in `slot` with its anchor at (row, col).
    ///
    /// On error the session is untouched.
    pub fn execute_placement(
        &mut self,
        slot: usize,
        row: i8,
        col: i8,
        generator: &mut dyn ShapeGenerator,
    ) -> Result<PlacementReport, PlaceError> {
        if self.over {
            return Err(PlaceError::GameOver);
        }

        let Some(shape) = self.tray.get(slot).and_then(Slot::shape) else {
            return Err(PlaceError::InvalidSlot(slot));
        };

        if !self.grid.can_place(shape, row, col) {
            return Err(PlaceError::PlacementRejected { row, col });
        }

        self.grid.place(shape, row, col);
        self.tray[slot] = Slot::Empty;

        let cleared = self.grid.clear_full_lines();
        let lines_cleared = cleared.total() as u32;
        let points = lines_cleared.saturating_mul(POINTS_PER_LINE);
        self.score = self.score.saturating_add(points);

        let tray_refilled = self.tray.iter().all(Slot::is_empty);
        if tray_refilled {
            self.refill_tray(generator);
        }

        self.over = !has_any_placement(&self.grid, &self.tray);

        debug!(
            slot,
            row,
            col,
            rows_cleared = cleared.rows.len(),
            cols_cleared = cleared.cols.len(),
            score = self.score,
            "shape placed"
        );
        if self.over {
            info!(score = self.score, "no shape fits, block packing game over");
        }

        Ok(PlacementReport {
            lines_cleared,
            points,
            score: self.score,
            tray_refilled,
            game_over: self.over,
        })
    }

    /// Reset to an empty board, a fresh tray and zero score
    pub fn new_game(&mut self, generator: &mut dyn ShapeGenerator) {
        self.grid.clear();
        self.refill_tray(generator);
        self.score = 0;
        self.over = !has_any_placement(&self.grid, &self.tray);
    }

    fn refill_tray(&mut self, generator: &mut dyn ShapeGenerator) {
        for slot in &mut self.tray {
            *slot = Slot::Occupied(generator.generate());
        }
    }
}
