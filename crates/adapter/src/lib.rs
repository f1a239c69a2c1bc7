//! Adapter module - in-memory collaborators and runtime configuration
//!
//! The core engines only see the traits in `arcade_core::ports`. This crate provides
//! process-local implementations of them, suitable for a single-host deployment, tests
//! and the self-play runner:
//!
//! - [`InMemorySessionStore`]: word games, session scores and per-player locks
//! - [`InMemoryAccountLedger`]: accounts and best scores with atomic compare-and-set
//! - [`InMemoryEntityStore`]: block-packing sessions and chess-puzzle progress
//! - [`StaticWordSource`]: fixed answer list with seedable random picks
//!
//! All stores are `DashMap`-backed and safe to share between threads; different players'
//! keys never contend on the same lock.
//!
//! # Environment Variables
//!
//! See [`config`] for the variables read by [`ArcadeConfig::from_env`].

pub mod config;
pub mod entity_store;
pub mod ledger;
pub mod session_store;
pub mod words;

pub use arcade_core as core;
pub use arcade_types as types;

pub use config::ArcadeConfig;
pub use entity_store::InMemoryEntityStore;
pub use ledger::InMemoryAccountLedger;
pub use session_store::InMemorySessionStore;
pub use words::{StaticWordSource, BUILTIN_ANSWERS};
