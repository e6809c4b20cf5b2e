//! # holly-core
//!
//! Core types and logic for Hollytree, shared across all crates:
//! - Domain enums (affiliation, theme, ornament color) with their wire labels
//! - Entity structs for survey input, ornament designs, and placed ornaments
//! - The static ornament catalog and tree geometry constants
//! - The `|||` content metadata codec used by the remote post store
//! - The session state machine (pure `(state, event) -> state` transitions)
//! - Interest ranking aggregation
//! - Cross-cutting error types

pub mod catalog;
pub mod codec;
pub mod enums;
pub mod errors;
pub mod geometry;
pub mod ornament;
pub mod post;
pub mod ranking;
pub mod session;
pub mod user;

pub use enums::{Affiliation, OrnamentColor, Step, Theme};
pub use errors::CoreError;
pub use ornament::{OrnamentDesign, PlacedOrnament, Provenance};
pub use post::{Comment, PostSummary, RankingItem};
pub use session::{Session, SessionEvent};
pub use user::UserData;
