#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// The player who moves after `self`.
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "RED",
            Player::Blue => "BLUE",
        }
    }
}
