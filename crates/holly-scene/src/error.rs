//! Placement engine error types.

use thiserror::Error;

/// Errors raised while planning or committing a placement.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Slot index outside the fixed slot set (0-6).
    #[error("unknown slot index: {0}")]
    UnknownSlot(u8),

    /// Every panel already holds an ornament at this slot for this room.
    /// Non-fatal; the user picks a different slot.
    #[error("slot {0} is full on every panel")]
    SlotFull(u8),

    /// The session already placed its one ornament.
    #[error("an ornament was already placed this session")]
    AlreadyPlaced,

    /// Placement requires a surveyed affiliation.
    #[error("affiliation is not set")]
    MissingAffiliation,

    /// The remote write failed; state stays unplaced so the user may retry.
    #[error(transparent)]
    Api(#[from] holly_api::ApiError),
}
