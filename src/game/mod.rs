pub mod board;
pub mod cursor;
pub mod player;
pub mod state;
pub mod win;

pub use board::{RingBoard, Slot};
pub use cursor::{OrbitCursor, slot_angle};
pub use player::Player;
pub use state::{Game, Phase, Placement};
pub use win::{RUN_LENGTH, find_winner, winning_run};
