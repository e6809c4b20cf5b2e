//! In-memory ornament board: occupancy queries, panel planning, rooms,
//! and name search.

use rand::Rng;
use rand::seq::IndexedRandom;

use holly_core::geometry::{self, PANEL_COUNT, Y_TOLERANCE};
use holly_core::{Affiliation, PlacedOrnament};

use crate::error::SceneError;

/// A resolved placement: the chosen panel plus the slot's anchor
/// coordinates, ready for the remote write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedPlacement {
    pub panel_index: u8,
    pub slot_index: u8,
    pub x: f64,
    pub y: f64,
}

/// A successful name search: the room to switch to and the rotation that
/// brings the matching panel to the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub user_name: String,
    pub affiliation: Affiliation,
    pub panel_index: u8,
    pub rotation_degrees: i32,
}

/// The full in-memory list of placed ornaments, re-fetched wholesale per
/// session. No index is built; a few hundred records at most.
#[derive(Debug, Clone, Default)]
pub struct Board {
    ornaments: Vec<PlacedOrnament>,
}

impl Board {
    #[must_use]
    pub const fn new(ornaments: Vec<PlacedOrnament>) -> Self {
        Self { ornaments }
    }

    #[must_use]
    pub fn ornaments(&self) -> &[PlacedOrnament] {
        &self.ornaments
    }

    pub fn push(&mut self, ornament: PlacedOrnament) {
        self.ornaments.push(ornament);
    }

    /// The ornaments of one room, for rendering. The viewed room is
    /// independent of the viewer's own affiliation.
    pub fn visible(&self, room: Affiliation) -> impl Iterator<Item = &PlacedOrnament> {
        self.ornaments.iter().filter(move |o| o.affiliation == room)
    }

    /// Panel indices already holding an ornament at this slot for this
    /// room. Records with a slot index match exactly; legacy records
    /// (written before slot indices existed) fall back to approximate
    /// y-coordinate equality.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownSlot`] for a slot index outside 0-6.
    pub fn occupied_panels(
        &self,
        affiliation: Affiliation,
        slot_index: u8,
    ) -> Result<Vec<u8>, SceneError> {
        let slot = geometry::slot_point(slot_index).ok_or(SceneError::UnknownSlot(slot_index))?;
        let target_y = slot.orb_y;

        Ok(self
            .ornaments
            .iter()
            .filter(|o| o.affiliation == affiliation)
            .filter(|o| match o.slot_index {
                Some(index) => index == slot_index,
                None => (o.y - target_y).abs() < Y_TOLERANCE,
            })
            .map(|o| o.panel_index)
            .collect())
    }

    /// The complement of the occupied set within the fixed panel range.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownSlot`] for a slot index outside 0-6.
    pub fn available_panels(
        &self,
        affiliation: Affiliation,
        slot_index: u8,
    ) -> Result<Vec<u8>, SceneError> {
        let occupied = self.occupied_panels(affiliation, slot_index)?;
        Ok((0..PANEL_COUNT)
            .filter(|panel| !occupied.contains(panel))
            .collect())
    }

    /// Resolve a slot choice into a concrete placement: a uniformly random
    /// free panel plus the slot's anchor coordinates. The randomization
    /// spreads placements visually around the tree; it carries no fairness
    /// or security meaning.
    ///
    /// # Errors
    ///
    /// [`SceneError::SlotFull`] when every panel holds an ornament at this
    /// slot, [`SceneError::UnknownSlot`] for an out-of-range slot index.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        affiliation: Affiliation,
        slot_index: u8,
        rng: &mut R,
    ) -> Result<PlannedPlacement, SceneError> {
        let available = self.available_panels(affiliation, slot_index)?;
        let panel_index = *available
            .choose(rng)
            .ok_or(SceneError::SlotFull(slot_index))?;

        // slot_point is known good: available_panels validated the index.
        let (x, y) = geometry::slot_point(slot_index)
            .ok_or(SceneError::UnknownSlot(slot_index))?
            .anchor();

        Ok(PlannedPlacement {
            panel_index,
            slot_index,
            x,
            y,
        })
    }

    /// Linear-scan the whole board (all rooms) for an exact name or id
    /// match. On a hit the caller switches the viewed room and applies the
    /// returned rotation.
    #[must_use]
    pub fn search(&self, term: &str) -> Option<SearchHit> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        self.ornaments
            .iter()
            .find(|o| o.user_name == term || o.id == term)
            .map(|o| SearchHit {
                user_name: o.user_name.clone(),
                affiliation: o.affiliation,
                panel_index: o.panel_index,
                rotation_degrees: geometry::rotation_for_panel(o.panel_index),
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    use holly_core::{OrnamentDesign, Provenance};

    use super::*;

    fn design() -> OrnamentDesign {
        OrnamentDesign {
            id: "plain".into(),
            cap: "cap".into(),
            shape: "shape".into(),
        }
    }

    fn ornament(
        name: &str,
        affiliation: Affiliation,
        panel_index: u8,
        slot_index: Option<u8>,
        y: f64,
    ) -> PlacedOrnament {
        PlacedOrnament {
            id: format!("id-{name}-{panel_index}"),
            user_name: name.into(),
            affiliation,
            design: design(),
            panel_index,
            slot_index,
            x: 0.5,
            y,
            message: "msg".into(),
            provenance: Provenance::Confirmed,
        }
    }

    #[test]
    fn occupancy_is_scoped_to_the_affiliation() {
        let board = Board::new(vec![
            ornament("a", Affiliation::FirstYear, 2, Some(1), 0.33),
            ornament("b", Affiliation::SecondYear, 2, Some(1), 0.33),
        ]);

        let occupied = board
            .occupied_panels(Affiliation::FirstYear, 1)
            .unwrap();
        assert_eq!(occupied, vec![2]);
    }

    #[rstest]
    // Slot 1's anchor y is 0.33; tolerance is 0.05.
    #[case(0.30, true)]
    #[case(0.33, true)]
    #[case(0.50, false)]
    fn legacy_records_match_by_y_tolerance(#[case] y: f64, #[case] matches: bool) {
        let board = Board::new(vec![ornament("legacy", Affiliation::FirstYear, 5, None, y)]);

        let occupied = board
            .occupied_panels(Affiliation::FirstYear, 1)
            .unwrap();
        assert_eq!(occupied.is_empty(), !matches);
    }

    #[test]
    fn plan_never_selects_an_occupied_panel() {
        let mut ornaments: Vec<PlacedOrnament> = (0..15)
            .map(|panel| ornament("n", Affiliation::ThirdYear, panel, Some(3), 0.48))
            .collect();
        ornaments.push(ornament("other-slot", Affiliation::ThirdYear, 16, Some(2), 0.4));
        let board = Board::new(ornaments);

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = board.plan(Affiliation::ThirdYear, 3, &mut rng).unwrap();
            assert!([15, 16, 17].contains(&plan.panel_index));
        }
    }

    #[test]
    fn full_slot_is_rejected() {
        let ornaments: Vec<PlacedOrnament> = (0..PANEL_COUNT)
            .map(|panel| ornament("n", Affiliation::FirstYear, panel, Some(0), 0.22))
            .collect();
        let board = Board::new(ornaments);

        let mut rng = StdRng::seed_from_u64(7);
        let err = board.plan(Affiliation::FirstYear, 0, &mut rng).unwrap_err();
        assert!(matches!(err, SceneError::SlotFull(0)));

        // A different room still has all 18 panels free.
        assert_eq!(
            board
                .available_panels(Affiliation::SecondYear, 0)
                .unwrap()
                .len(),
            usize::from(PANEL_COUNT)
        );
    }

    #[test]
    fn plan_uses_the_slot_anchor_coordinates() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(1);
        let plan = board.plan(Affiliation::FirstYear, 2, &mut rng).unwrap();
        assert_eq!((plan.x, plan.y), (0.56, 0.4));
        assert_eq!(plan.slot_index, 2);
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let board = Board::default();
        assert!(matches!(
            board.occupied_panels(Affiliation::FirstYear, 7),
            Err(SceneError::UnknownSlot(7))
        ));
    }

    #[test]
    fn search_switches_room_and_computes_rotation() {
        let board = Board::new(vec![
            ornament("민서", Affiliation::FirstYear, 2, Some(1), 0.33),
            ornament("준호", Affiliation::AdvancedMajor, 7, Some(4), 0.63),
        ]);

        let hit = board.search("준호").unwrap();
        assert_eq!(hit.affiliation, Affiliation::AdvancedMajor);
        assert_eq!(hit.panel_index, 7);
        assert_eq!(hit.rotation_degrees, -140);
    }

    #[test]
    fn search_misses_report_none() {
        let board = Board::new(vec![ornament("민서", Affiliation::FirstYear, 2, Some(1), 0.33)]);
        assert!(board.search("없는사람").is_none());
        assert!(board.search("   ").is_none());
    }

    #[test]
    fn visible_filters_one_room() {
        let board = Board::new(vec![
            ornament("a", Affiliation::FirstYear, 0, Some(0), 0.22),
            ornament("b", Affiliation::SecondYear, 1, Some(0), 0.22),
            ornament("c", Affiliation::FirstYear, 2, Some(1), 0.33),
        ]);
        assert_eq!(board.visible(Affiliation::FirstYear).count(), 2);
        assert_eq!(board.visible(Affiliation::Professor).count(), 0);
    }
}
