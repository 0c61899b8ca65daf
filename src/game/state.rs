use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::game::{OrbitCursor, Player, RingBoard, find_winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won(Player),
}

/// Result of a placement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed { slot: usize, player: Player },
    BoardFull,
    Debounced,
    GameOver,
}

pub struct Game {
    board: RingBoard,
    cursor: OrbitCursor,
    current: Player,
    phase: Phase,
    cooldown: Duration,
    cooldown_until: Option<Instant>,
    placements: u32,
}

impl Game {
    pub fn new(slots: usize, speed: f64, cooldown: Duration) -> Self {
        Self {
            board: RingBoard::new(slots),
            cursor: OrbitCursor::new(slots, speed),
            current: Player::Red,
            phase: Phase::Playing,
            cooldown,
            cooldown_until: None,
            placements: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.slots,
            settings.speed,
            Duration::from_millis(settings.debounce_ms),
        )
    }

    pub fn board(&self) -> &RingBoard {
        &self.board
    }

    pub fn cursor(&self) -> &OrbitCursor {
        &self.cursor
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won(p) => Some(p),
            Phase::Playing => None,
        }
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn can_place(&self, now: Instant) -> bool {
        self.phase == Phase::Playing && self.cooldown_until.is_none_or(|until| now >= until)
    }

    /// One animation frame. The win check runs before the cursor moves, so a
    /// won board never advances.
    pub fn tick(&mut self, dt_frames: f64) {
        if self.phase != Phase::Playing {
            return;
        }
        if self.check_winner() {
            return;
        }
        self.cursor.advance(dt_frames);
    }

    pub fn place_piece(&mut self, now: Instant) -> Placement {
        if self.phase != Phase::Playing {
            return Placement::GameOver;
        }
        if !self.can_place(now) {
            return Placement::Debounced;
        }
        self.cooldown_until = Some(now + self.cooldown);

        let Some(slot) = self.cursor.nearest_empty_slot(&self.board) else {
            return Placement::BoardFull;
        };
        let player = self.current;
        if !self.board.place(slot, player) {
            return Placement::BoardFull;
        }
        self.placements += 1;
        self.current = player.other();
        self.check_winner();
        Placement::Placed { slot, player }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.cursor.reset();
        self.current = Player::Red;
        self.phase = Phase::Playing;
        self.cooldown_until = None;
        self.placements = 0;
        log::info!("game reset");
    }

    fn check_winner(&mut self) -> bool {
        if let Phase::Won(_) = self.phase {
            return true;
        }
        match find_winner(&self.board) {
            Some(winner) => {
                self.phase = Phase::Won(winner);
                log::info!(
                    "{} wins after {} placements",
                    winner.name(),
                    self.placements
                );
                true
            }
            None => false,
        }
    }
}
