use super::{Player, RingBoard, Slot};

/// Pieces in a row needed to win.
pub const RUN_LENGTH: usize = 4;

/// First run of `RUN_LENGTH` same-owner slots, scanning start indices in
/// ascending order. Runs may cross the seam between the last slot and slot 0.
pub fn winning_run(board: &RingBoard) -> Option<(Player, [usize; RUN_LENGTH])> {
    let n = board.len();
    if n < RUN_LENGTH {
        return None;
    }
    for start in 0..n {
        let Slot::Taken(owner) = board.get(start) else {
            continue;
        };
        if (1..RUN_LENGTH).all(|k| board.get(start + k) == Slot::Taken(owner)) {
            let mut run = [0; RUN_LENGTH];
            for (k, idx) in run.iter_mut().enumerate() {
                *idx = (start + k) % n;
            }
            return Some((owner, run));
        }
    }
    None
}

pub fn find_winner(board: &RingBoard) -> Option<Player> {
    winning_run(board).map(|(owner, _)| owner)
}
