//! RNG module - shape generation for the block-packing tray
//!
//! Shape generation is an injected capability: the engine asks a [`ShapeGenerator`]
//! for a new shape whenever the tray refills.
//!
//! - [`CatalogShapeGenerator`]: uniform draw from the catalog, seedable for replays
//! - [`ScriptedShapeGenerator`]: replays a fixed sequence, for deterministic tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shapes::{Shape, ShapeKind};

/// Source of fresh tray shapes
pub trait ShapeGenerator {
    fn generate(&mut self) -> Shape;
}

/// Uniform random draw from [`ShapeKind::ALL`]
#[derive(Debug, Clone)]
pub struct CatalogShapeGenerator {
    rng: StdRng,
}

impl CatalogShapeGenerator {
    /// Deterministic generator: the same seed deals the same shapes
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw the next catalog kind
    pub fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.gen_range(0..ShapeKind::ALL.len())]
    }
}

impl ShapeGenerator for CatalogShapeGenerator {
    fn generate(&mut self) -> Shape {
        Shape::of(self.next_kind())
    }
}

/// Cycles through a fixed list of shapes
#[derive(Debug, Clone)]
pub struct ScriptedShapeGenerator {
    script: Vec<Shape>,
    next: usize,
}

impl ScriptedShapeGenerator {
    /// An empty script deals single cells
    pub fn new(script: Vec<Shape>) -> Self {
        Self { script, next: 0 }
    }

    pub fn of_kinds(kinds: &[ShapeKind]) -> Self {
        Self::new(kinds.iter().map(|&kind| Shape::of(kind)).collect())
    }

    /// Always deals the same shape
    pub fn repeating(kind: ShapeKind) -> Self {
        Self::of_kinds(&[kind])
    }

    /// Number of shapes dealt so far
    pub fn dealt(&self) -> usize {
        self.next
    }
}

impl ShapeGenerator for ScriptedShapeGenerator {
    fn generate(&mut self) -> Shape {
        if self.script.is_empty() {
            self.next += 1;
            return Shape::of(ShapeKind::Mono);
        }
        let shape = self.script[self.next % self.script.len()].clone();
        self.next += 1;
        shape
    }
}
