//! Arcade (workspace facade crate).
//!
//! Re-exports the workspace crates as `arcade::{types, core, engine, adapter}` and adds
//! the [`selfplay`] runner used by the default binary.

pub use arcade_adapter as adapter;
pub use arcade_core as core;
pub use arcade_engine as engine;
pub use arcade_types as types;

pub mod selfplay;
