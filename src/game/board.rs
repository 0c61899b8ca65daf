use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Empty,
    Taken(Player),
}

/// Fixed-size ring of slots. Index `len - 1` is adjacent to index 0.
#[derive(Debug, Clone)]
pub struct RingBoard {
    slots: Vec<Slot>,
}

impl RingBoard {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; len],
        }
    }

    fn idx(&self, i: usize) -> usize {
        i % self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, i: usize) -> Slot {
        self.slots[self.idx(i)]
    }

    pub fn is_empty(&self, i: usize) -> bool {
        self.get(i) == Slot::Empty
    }

    /// Claims slot `i` for `player`. An occupied slot keeps its owner and
    /// `false` is returned.
    pub fn place(&mut self, i: usize, player: Player) -> bool {
        let idx = self.idx(i);
        if self.slots[idx] != Slot::Empty {
            return false;
        }
        self.slots[idx] = Slot::Taken(player);
        true
    }

    pub fn reset(&mut self) {
        self.slots.fill(Slot::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| *s != Slot::Empty)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| **s != Slot::Empty).count()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}
