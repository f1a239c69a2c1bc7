//! Shapes module - the block-packing polyomino catalog
//!
//! Every catalog entry is a set of (row, col) offsets from an anchor at the shape's
//! top-left bounding-box corner, plus a fixed color. Shapes never rotate: each
//! orientation that the game offers is its own catalog entry.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Color, MAX_SHAPE_CELLS};

/// Offset of a single cell relative to the shape anchor, as (row, col)
pub type CellOffset = (i8, i8);

/// Canonical shapes dealt into the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Mono,
    DominoH,
    DominoV,
    LineH3,
    LineV3,
    LineH4,
    LineV4,
    Square,
    Corner,
    TUp,
    TDown,
    L,
    J,
}

impl ShapeKind {
    /// Every catalog entry; generators draw uniformly from this list
    pub const ALL: [ShapeKind; 13] = [
        ShapeKind::Mono,
        ShapeKind::DominoH,
        ShapeKind::DominoV,
        ShapeKind::LineH3,
        ShapeKind::LineV3,
        ShapeKind::LineH4,
        ShapeKind::LineV4,
        ShapeKind::Square,
        ShapeKind::Corner,
        ShapeKind::TUp,
        ShapeKind::TDown,
        ShapeKind::L,
        ShapeKind::J,
    ];

    pub fn offsets(self) -> &'static [CellOffset] {
        match self {
            ShapeKind::Mono => &[(0, 0)],
            ShapeKind::DominoH => &[(0, 0), (0, 1)],
            ShapeKind::DominoV => &[(0, 0), (1, 0)],
            ShapeKind::LineH3 => &[(0, 0), (0, 1), (0, 2)],
            ShapeKind::LineV3 => &[(0, 0), (1, 0), (2, 0)],
            ShapeKind::LineH4 => &[(0, 0), (0, 1), (0, 2), (0, 3)],
            ShapeKind::LineV4 => &[(0, 0), (1, 0), (2, 0), (3, 0)],
            ShapeKind::Square => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            ShapeKind::Corner => &[(0, 0), (1, 0), (1, 1)],
            ShapeKind::TUp => &[(0, 1), (1, 0), (1, 1), (1, 2)],
            ShapeKind::TDown => &[(0, 0), (0, 1), (0, 2), (1, 1)],
            ShapeKind::L => &[(0, 0), (1, 0), (2, 0), (2, 1)],
            ShapeKind::J => &[(0, 1), (1, 1), (2, 0), (2, 1)],
        }
    }

    pub fn color(self) -> Color {
        match self {
            ShapeKind::Mono => Color::Red,
            ShapeKind::DominoH | ShapeKind::DominoV => Color::Orange,
            ShapeKind::LineH3 | ShapeKind::LineV3 => Color::Green,
            ShapeKind::LineH4 | ShapeKind::LineV4 => Color::Cyan,
            ShapeKind::Square => Color::Yellow,
            ShapeKind::Corner => Color::Purple,
            ShapeKind::TUp | ShapeKind::TDown => Color::Purple,
            ShapeKind::L | ShapeKind::J => Color::Blue,
        }
    }
}

/// A placeable piece: offsets from its anchor plus a color. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    offsets: ArrayVec<CellOffset, MAX_SHAPE_CELLS>,
    color: Color,
}

impl Shape {
    /// Catalog shape in its default color
    pub fn of(kind: ShapeKind) -> Self {
        let mut offsets = ArrayVec::new();
        offsets.extend(kind.offsets().iter().copied());
        Self {
            offsets,
            color: kind.color(),
        }
    }

    /// Custom shape. Returns `None` when `offsets` is empty, too large, or repeats a cell.
    pub fn from_offsets(offsets: &[CellOffset], color: Color) -> Option<Self> {
        if offsets.is_empty() || offsets.len() > MAX_SHAPE_CELLS {
            return None;
        }
        let mut cells: ArrayVec<CellOffset, MAX_SHAPE_CELLS> = ArrayVec::new();
        for &offset in offsets {
            if cells.contains(&offset) {
                return None;
            }
            cells.push(offset);
        }
        Some(Self {
            offsets: cells,
            color,
        })
    }

    pub fn offsets(&self) -> &[CellOffset] {
        &self.offsets
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
