use std::collections::HashSet;

use crate::game::{OrbitCursor, slot_angle};

// Terminal cells are roughly twice as tall as wide.
const X_STRETCH: f64 = 2.0;

/// Maps ring angles onto a character grid. Angle 0 points right and angles
/// grow clockwise on screen, since rows grow downward.
pub struct RingLayout {
    pub width: usize,
    pub height: usize,
    radius: u16,
}

impl RingLayout {
    pub fn new(radius: u16) -> Self {
        let r = radius as usize;
        Self {
            width: 4 * r + 5,
            height: 2 * r + 3,
            radius,
        }
    }

    fn point(&self, angle: f64, rows: f64) -> (usize, usize) {
        let (cx, cy) = self.center();
        let (cx, cy) = (cx as f64, cy as f64);
        let x = (cx + X_STRETCH * rows * angle.cos()).round();
        let y = (cy + rows * angle.sin()).round();
        (
            x.clamp(0.0, (self.width - 1) as f64) as usize,
            y.clamp(0.0, (self.height - 1) as f64) as usize,
        )
    }

    pub fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    pub fn slot_cell(&self, i: usize, n: usize) -> (usize, usize) {
        self.point(slot_angle(i, n), self.radius as f64)
    }

    /// True when every one of `n` slots gets its own grid cell.
    pub fn fits(&self, n: usize) -> bool {
        let cells: HashSet<_> = (0..n).map(|i| self.slot_cell(i, n)).collect();
        cells.len() == n
    }

    /// The marker orbits just inside the ring of slots.
    pub fn marker_cell(&self, cursor: &OrbitCursor) -> (usize, usize) {
        self.point(cursor.angle(), self.radius.saturating_sub(2) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ring_has_distinct_cells() {
        let layout = RingLayout::new(8);
        let cells: HashSet<_> = (0..20).map(|i| layout.slot_cell(i, 20)).collect();
        assert_eq!(cells.len(), 20);
        for (x, y) in cells {
            assert!(x < layout.width && y < layout.height);
        }
    }

    #[test]
    fn test_fits_rejects_crowded_ring() {
        assert!(RingLayout::new(8).fits(20));
        assert!(RingLayout::new(8).fits(64));
        assert!(RingLayout::new(3).fits(20));
        assert!(!RingLayout::new(3).fits(64));
    }

    #[test]
    fn test_slot_orientation() {
        let layout = RingLayout::new(8);
        let (cx, cy) = layout.center();
        // Slot 0 sits right of center, slot 5 of 20 (a quarter turn) below it.
        assert_eq!(layout.slot_cell(0, 20), (cx + 16, cy));
        assert_eq!(layout.slot_cell(5, 20), (cx, cy + 8));
    }

    #[test]
    fn test_marker_tracks_cursor() {
        let layout = RingLayout::new(8);
        let mut cursor = OrbitCursor::new(20, 1.0);
        let (cx, cy) = layout.center();
        assert_eq!(layout.marker_cell(&cursor), (cx + 12, cy));
        cursor.advance(10.0);
        assert_eq!(layout.marker_cell(&cursor), (cx - 12, cy));
    }
}
