use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Settings;
use crate::error::AppError;
use crate::game::{Game, Placement};
use crate::ui::draw_game;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run(settings: &Settings) -> Result<(), AppError> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), settings)
}

fn run_loop(terminal: &mut Term, settings: &Settings) -> Result<(), AppError> {
    let mut game = Game::from_settings(settings);
    let frame = Duration::from_millis(settings.frame_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw_game(f, &game, settings.radius))?;

        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                    handle_input(key.code, &mut game);
                }
            }
        }

        // Late frames advance the cursor proportionally.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            game.tick(elapsed.as_secs_f64() / frame.as_secs_f64());
            last_tick = Instant::now();
        }
    }
    log::info!("quit after {} placements", game.placements());
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, game: &mut Game) {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            match game.place_piece(Instant::now()) {
                Placement::Placed { slot, player } => {
                    log::debug!(
                        "{} dropped into slot {} (cursor {:.2})",
                        player.name(),
                        slot,
                        game.cursor().position()
                    );
                }
                Placement::BoardFull => log::debug!("no empty slot left, waiting for reset"),
                Placement::Debounced | Placement::GameOver => {}
            }
        }
        KeyCode::Char('r') => game.reset(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::from_settings(&Settings::default())
    }

    #[test]
    fn test_space_and_enter_place() {
        let mut game = game();
        handle_input(KeyCode::Char(' '), &mut game);
        assert_eq!(game.placements(), 1);
        // Enter right away falls inside the cooldown.
        handle_input(KeyCode::Enter, &mut game);
        assert_eq!(game.placements(), 1);
    }

    #[test]
    fn test_reset_key() {
        let mut game = game();
        handle_input(KeyCode::Char(' '), &mut game);
        handle_input(KeyCode::Char('r'), &mut game);
        assert_eq!(game.placements(), 0);
        assert_eq!(game.board().filled_count(), 0);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut game = game();
        handle_input(KeyCode::Left, &mut game);
        handle_input(KeyCode::Char('x'), &mut game);
        assert_eq!(game.placements(), 0);
    }
}
