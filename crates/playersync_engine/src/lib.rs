//! # PlayerSync Engine
//!
//! Snapshot capture and apply orchestration.
//!
//! This crate provides:
//! - [`PlayerHandle`], the capability interface a game-server platform
//!   implements for each logged-in player
//! - [`PreSyncHook`], the extension point fired before any facet is written
//! - [`SyncConfig`], the per-deployment facet toggles
//! - [`Synchronizer`], which captures snapshots from and applies snapshots
//!   to live players
//!
//! ## Concurrency Model
//!
//! Each facet read or write is an independently scheduled asynchronous
//! unit. Capture and apply both fan out one unit per facet and fan back in
//! through a single join that waits for every unit to settle, then reports
//! the first failure if any occurred. No cancellation is propagated to
//! in-flight siblings and no timeout is enforced.
//!
//! ## Key Invariants
//!
//! - A snapshot from a newer game or format version is rejected whole,
//!   never partially applied
//! - A failed capture yields no snapshot, never a partial one
//! - Facet writes that completed before a sibling failed stay applied;
//!   there is no rollback across facets
//! - A cancelled or offline apply resolves successfully with zero writes

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handle;
mod hook;
mod synchronizer;

pub use config::SyncConfig;
pub use error::{FacetError, FacetResult};
pub use handle::{MockPlayer, MockPlayerState, PlayerHandle};
pub use hook::{NoopHook, PreSyncHook, PreSyncOutcome, ScriptedHook};
pub use synchronizer::Synchronizer;
