use std::f64::consts::TAU;

use super::RingBoard;

/// Angle in radians of slot `i` on a ring of `n` slots.
pub fn slot_angle(i: usize, n: usize) -> f64 {
    i as f64 * TAU / n as f64
}

/// Marker that orbits the ring, measured in slots.
#[derive(Debug, Clone)]
pub struct OrbitCursor {
    position: f64,
    speed: f64,
    len: usize,
}

impl OrbitCursor {
    pub fn new(len: usize, speed: f64) -> Self {
        Self {
            position: 0.0,
            speed,
            len,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn angle(&self) -> f64 {
        self.position * TAU / self.len as f64
    }

    pub fn advance(&mut self, dt_frames: f64) {
        let n = self.len as f64;
        self.position = (self.position + self.speed * dt_frames).rem_euclid(n);
        // rem_euclid can round up to exactly n for tiny negative inputs.
        if self.position >= n {
            self.position = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.position = 0.0;
    }

    /// Empty slot closest to the marker along the ring. Ties go to the lowest
    /// index; `None` once the board is full.
    pub fn nearest_empty_slot(&self, board: &RingBoard) -> Option<usize> {
        let n = board.len() as f64;
        let mut best: Option<(usize, f64)> = None;
        for i in 0..board.len() {
            if !board.is_empty(i) {
                continue;
            }
            let d = (self.position - i as f64).abs() % n;
            let dist = d.min(n - d);
            if best.is_none_or(|(_, min)| dist < min) {
                best = Some((i, dist));
            }
        }
        best.map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_advance_wraps() {
        let mut cursor = OrbitCursor::new(20, 0.15);
        for _ in 0..200 {
            cursor.advance(1.0);
            assert!((0.0..20.0).contains(&cursor.position()));
        }
        // 200 * 0.15 = 30 slots, i.e. one lap plus 10.
        assert!((cursor.position() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_scales_with_frames() {
        let mut cursor = OrbitCursor::new(20, 0.5);
        cursor.advance(3.0);
        assert!((cursor.position() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_negative_speed_stays_in_range() {
        let mut cursor = OrbitCursor::new(20, -0.25);
        cursor.advance(1.0);
        assert!((cursor.position() - 19.75).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_after_reaching_five() {
        let board = RingBoard::new(20);
        let mut cursor = OrbitCursor::new(20, 0.15);
        while cursor.position() < 4.9 {
            cursor.advance(1.0);
        }
        assert!((cursor.position() - 5.0).abs() < 0.1);
        assert_eq!(cursor.nearest_empty_slot(&board), Some(5));
    }

    #[test]
    fn test_nearest_skips_taken_slots() {
        let mut board = RingBoard::new(20);
        board.place(5, Player::Red);
        let mut cursor = OrbitCursor::new(20, 1.0);
        cursor.advance(5.2);
        assert_eq!(cursor.nearest_empty_slot(&board), Some(6));
    }

    #[test]
    fn test_nearest_across_the_seam() {
        let mut board = RingBoard::new(20);
        board.place(19, Player::Blue);
        let mut cursor = OrbitCursor::new(20, 1.0);
        cursor.advance(19.4);
        // Slot 0 is 0.6 away going forward, slot 18 is 1.4 away going back.
        assert_eq!(cursor.nearest_empty_slot(&board), Some(0));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let mut board = RingBoard::new(20);
        board.place(5, Player::Red);
        let mut cursor = OrbitCursor::new(20, 1.0);
        cursor.advance(5.0);
        // Slots 4 and 6 are both exactly one slot away.
        assert_eq!(cursor.nearest_empty_slot(&board), Some(4));
    }

    #[test]
    fn test_full_board_has_no_slot() {
        let mut board = RingBoard::new(6);
        for i in 0..6 {
            board.place(i, Player::Red);
        }
        let cursor = OrbitCursor::new(6, 0.15);
        assert_eq!(cursor.nearest_empty_slot(&board), None);
    }

    #[test]
    fn test_angles() {
        assert_eq!(slot_angle(0, 20), 0.0);
        assert!((slot_angle(5, 20) - TAU / 4.0).abs() < 1e-12);
        let mut cursor = OrbitCursor::new(20, 1.0);
        cursor.advance(10.0);
        assert!((cursor.angle() - TAU / 2.0).abs() < 1e-12);
    }
}
