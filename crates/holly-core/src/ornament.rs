//! Ornament designs and placed ornaments.

use serde::{Deserialize, Serialize};

use crate::enums::Affiliation;

/// An immutable catalog entry: a pattern id plus its cap and shape image
/// references. Selected, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrnamentDesign {
    pub id: String,
    pub cap: String,
    pub shape: String,
}

/// Whether a placed ornament has been seen in a store refetch or is still
/// a local optimistic append awaiting confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    #[default]
    Confirmed,
    Pending,
}

/// A durable ornament record on the shared tree.
///
/// Invariant (advisory only, enforced by a client-side occupancy check):
/// at most one ornament per (affiliation, slot index) per panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrnament {
    pub id: String,
    pub user_name: String,
    /// Partitions the shared tree into independent rooms.
    pub affiliation: Affiliation,
    pub design: OrnamentDesign,
    /// Angular position around the cylindrical tree, 0-17.
    pub panel_index: u8,
    /// Logical anchor point within a panel, 0-6. Absent on legacy records
    /// written before slot indices existed.
    pub slot_index: Option<u8>,
    /// Fractional placement coordinates in [0, 1].
    pub x: f64,
    pub y: f64,
    pub message: String,
    #[serde(default)]
    pub provenance: Provenance,
}
