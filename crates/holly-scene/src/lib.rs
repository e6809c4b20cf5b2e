//! # holly-scene
//!
//! The tree placement engine. Decides which panels are free for a chosen
//! slot, assigns a pseudo-random panel, commits the placement to the remote
//! store with an optimistic local append, and answers room-filtered render
//! and search queries over the in-memory ornament list.
//!
//! The occupancy check is advisory only: two sessions placing concurrently
//! can race past each other's check (classic check-then-act), and the store
//! enforces no uniqueness constraint. Duplicate occupancy of a nominally
//! full slot is an accepted failure mode surfaced by the next refresh.

mod board;
mod error;
mod scene;

pub use board::{Board, PlannedPlacement, SearchHit};
pub use error::SceneError;
pub use scene::{OrnamentStore, Placement, TreeScene};
