//! Fixed tree geometry: panels, slots, and rotation.

/// Number of angular segments composing the cylindrical tree.
pub const PANEL_COUNT: u8 = 18;

/// Angular width of one panel in degrees (18 panels x 20° = 360°).
pub const PANEL_STEP_DEGREES: i32 = 20;

/// Tolerance for matching legacy records (no slot index) by y coordinate.
pub const Y_TOLERANCE: f64 = 0.05;

/// One of the seven fixed anchor points per tree. The dot is the clickable
/// marker position; the orb is where the ornament actually hangs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPoint {
    pub dot_x: f64,
    pub dot_y: f64,
    pub orb_x: f64,
    pub orb_y: f64,
}

impl SlotPoint {
    /// Placement coordinates for an ornament hung at this slot.
    #[must_use]
    pub const fn anchor(&self) -> (f64, f64) {
        (self.orb_x, self.orb_y)
    }
}

/// The seven logical slots, top of the tree first.
pub const SLOT_POINTS: [SlotPoint; 7] = [
    SlotPoint { dot_x: 0.88, dot_y: 0.29, orb_x: 0.75, orb_y: 0.22 },
    SlotPoint { dot_x: 0.88, dot_y: 0.36, orb_x: 0.6, orb_y: 0.33 },
    SlotPoint { dot_x: 0.88, dot_y: 0.43, orb_x: 0.56, orb_y: 0.4 },
    SlotPoint { dot_x: 0.88, dot_y: 0.5, orb_x: 0.46, orb_y: 0.48 },
    SlotPoint { dot_x: 0.88, dot_y: 0.62, orb_x: 0.28, orb_y: 0.63 },
    SlotPoint { dot_x: 0.88, dot_y: 0.71, orb_x: 0.16, orb_y: 0.75 },
    SlotPoint { dot_x: 0.88, dot_y: 0.8, orb_x: 0.12, orb_y: 0.83 },
];

/// The slot configuration for a slot index, if in range.
#[must_use]
pub fn slot_point(slot_index: u8) -> Option<&'static SlotPoint> {
    SLOT_POINTS.get(usize::from(slot_index))
}

/// View rotation (degrees) that brings a panel to the front.
#[must_use]
pub const fn rotation_for_panel(panel_index: u8) -> i32 {
    -(panel_index as i32 * PANEL_STEP_DEGREES)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn panels_cover_full_circle() {
        assert_eq!(i32::from(PANEL_COUNT) * PANEL_STEP_DEGREES, 360);
    }

    #[test]
    fn slot_lookup_bounds() {
        assert!(slot_point(0).is_some());
        assert!(slot_point(6).is_some());
        assert!(slot_point(7).is_none());
    }

    #[test]
    fn anchor_uses_orb_coordinates() {
        let slot = slot_point(1).unwrap();
        assert_eq!(slot.anchor(), (0.6, 0.33));
    }

    #[test]
    fn rotation_is_negative_panel_angle() {
        assert_eq!(rotation_for_panel(0), 0);
        assert_eq!(rotation_for_panel(3), -60);
        assert_eq!(rotation_for_panel(17), -340);
    }
}
