//! Placement session: refresh, commit, and the one-shot placement gate.

use std::future::Future;

use rand::Rng;

use holly_api::{ApiError, SheetClient};
use holly_core::geometry;
use holly_core::{OrnamentDesign, PlacedOrnament, Provenance, UserData};

use crate::board::Board;
use crate::error::SceneError;

/// The store operations a placement session needs. [`SheetClient`] is the
/// production implementation; tests substitute an in-memory store.
pub trait OrnamentStore {
    /// Fetch every placed ornament on the shared tree.
    fn fetch_ornaments(
        &self,
    ) -> impl Future<Output = Result<Vec<PlacedOrnament>, ApiError>> + Send;

    /// Write one ornament record.
    fn save_ornament(
        &self,
        user: &UserData,
        design: &OrnamentDesign,
        panel_index: u8,
        slot_index: u8,
        x: f64,
        y: f64,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

impl OrnamentStore for SheetClient {
    async fn fetch_ornaments(&self) -> Result<Vec<PlacedOrnament>, ApiError> {
        Self::fetch_ornaments(self).await
    }

    async fn save_ornament(
        &self,
        user: &UserData,
        design: &OrnamentDesign,
        panel_index: u8,
        slot_index: u8,
        x: f64,
        y: f64,
    ) -> Result<(), ApiError> {
        Self::save_ornament(self, user, design, panel_index, slot_index, x, y).await
    }
}

/// A committed placement, with the rotation that brings its panel to the
/// front of the view.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub ornament: PlacedOrnament,
    pub rotation_degrees: i32,
}

/// One session over the shared tree: the remote client, the in-memory
/// board, and the has-placed gate. Once an ornament is placed, the gate
/// stays set for the rest of the session; there is no move or remove path.
pub struct TreeScene<C = SheetClient> {
    client: C,
    board: Board,
    has_placed: bool,
}

impl<C: OrnamentStore> TreeScene<C> {
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            board: Board::default(),
            has_placed: false,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn has_placed(&self) -> bool {
        self.has_placed
    }

    /// Re-fetch the full ornament list. Confirmed entries are replaced
    /// wholesale; pending optimistic entries are kept until the refetch
    /// shows them confirmed, so a failed-but-retried write cannot silently
    /// duplicate locally.
    ///
    /// A failed read degrades to an empty confirmed set with a warning,
    /// indistinguishable from a legitimately empty tree.
    pub async fn refresh(&mut self) {
        let confirmed = match self.client.fetch_ornaments().await {
            Ok(ornaments) => ornaments,
            Err(error) => {
                tracing::warn!(%error, "ornament fetch failed, showing an empty tree");
                Vec::new()
            }
        };
        self.board = reconcile(std::mem::take(&mut self.board), confirmed);
    }

    /// Commit one ornament at the chosen slot.
    ///
    /// Runs the availability query, picks a random free panel, issues the
    /// single remote write, and on success appends a pending local entry
    /// and sets the one-shot gate. On failure the state stays unplaced so
    /// a retry re-runs the availability query (a slot that filled in the
    /// interim is then correctly rejected).
    ///
    /// # Errors
    ///
    /// [`SceneError::AlreadyPlaced`], [`SceneError::MissingAffiliation`],
    /// [`SceneError::SlotFull`], [`SceneError::UnknownSlot`], or a wrapped
    /// [`holly_api::ApiError`] from the remote write.
    pub async fn place(
        &mut self,
        user: &UserData,
        design: &OrnamentDesign,
        slot_index: u8,
    ) -> Result<Placement, SceneError> {
        self.place_with_rng(user, design, slot_index, &mut rand::rng())
            .await
    }

    /// [`Self::place`] with a caller-supplied RNG, for deterministic tests.
    pub async fn place_with_rng<R: Rng + ?Sized>(
        &mut self,
        user: &UserData,
        design: &OrnamentDesign,
        slot_index: u8,
        rng: &mut R,
    ) -> Result<Placement, SceneError> {
        if self.has_placed {
            return Err(SceneError::AlreadyPlaced);
        }
        let affiliation = user.affiliation.ok_or(SceneError::MissingAffiliation)?;

        let plan = self.board.plan(affiliation, slot_index, rng)?;
        self.client
            .save_ornament(user, design, plan.panel_index, plan.slot_index, plan.x, plan.y)
            .await?;

        let ornament = PlacedOrnament {
            id: format!("pending-{}-{}", plan.slot_index, plan.panel_index),
            user_name: user.name.clone(),
            affiliation,
            design: design.clone(),
            panel_index: plan.panel_index,
            slot_index: Some(plan.slot_index),
            x: plan.x,
            y: plan.y,
            message: user.content.clone(),
            provenance: Provenance::Pending,
        };
        self.board.push(ornament.clone());
        self.has_placed = true;

        Ok(Placement {
            rotation_degrees: geometry::rotation_for_panel(ornament.panel_index),
            ornament,
        })
    }
}

/// Merge a refetched confirmed list with the previous board's pending
/// entries, dropping pendings the store now reports.
fn reconcile(previous: Board, confirmed: Vec<PlacedOrnament>) -> Board {
    let mut board = Board::new(confirmed);
    let still_pending: Vec<PlacedOrnament> = previous
        .ornaments()
        .iter()
        .filter(|o| o.provenance == Provenance::Pending)
        .filter(|pending| {
            !board.ornaments().iter().any(|c| {
                c.user_name == pending.user_name
                    && c.panel_index == pending.panel_index
                    && c.slot_index == pending.slot_index
            })
        })
        .cloned()
        .collect();
    for pending in still_pending {
        board.push(pending);
    }
    board
}
