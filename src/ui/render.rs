use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use super::ring::RingLayout;
use crate::game::{Game, Phase, Player, Slot, winning_run};

const INFO_H: u16 = 5;
const CONTROLS_H: u16 = 4;
const PANEL_MIN_W: u16 = 30;

type Grid = Vec<Vec<(char, Style)>>;

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Blue => Color::Blue,
    }
}

pub fn draw_game(frame: &mut Frame, game: &Game, radius: u16) {
    let area = frame.size();
    let layout = RingLayout::new(radius);
    let ring_w = layout.width as u16;
    let ring_h = layout.height as u16;
    let col_w = ring_w.max(PANEL_MIN_W);
    let min_w = col_w + 2;
    let min_h = ring_h + INFO_H + CONTROLS_H + 2;

    if area.width < min_w || area.height < min_h {
        let msg = Paragraph::new(format!("RESIZE PANE (min {}x{})", min_w, min_h))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("ORBIT FOUR"));
        frame.render_widget(msg, area);
        return;
    }

    let cabinet = Block::default()
        .title("ORBIT FOUR")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(col_w),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_H),
            Constraint::Length(ring_h),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(col_rect);

    let ring_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ring_w),
            Constraint::Min(0),
        ])
        .split(stack[2])[1];

    draw_info(frame, game, stack[1]);
    draw_ring(frame, game, &layout, ring_rect);
    draw_controls(frame, stack[3]);
}

fn draw_ring(frame: &mut Frame, game: &Game, layout: &RingLayout, rect: Rect) {
    let mut grid: Grid = vec![vec![(' ', Style::default()); layout.width]; layout.height];
    let board = game.board();
    let n = board.len();
    let run = winning_run(board).map(|(_, run)| run);

    for (i, slot) in board.slots().iter().enumerate() {
        let (x, y) = layout.slot_cell(i, n);
        grid[y][x] = match slot {
            Slot::Empty => ('□', Style::default().fg(Color::Gray)),
            Slot::Taken(p) => {
                let mut style = Style::default().fg(player_color(*p));
                if run.is_some_and(|r| r.contains(&i)) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                ('●', style)
            }
        };
    }

    // The marker freezes in place once the game is won.
    if game.phase() == Phase::Playing {
        let (x, y) = layout.marker_cell(game.cursor());
        let style = Style::default()
            .fg(player_color(game.current_player()))
            .add_modifier(Modifier::BOLD);
        grid[y][x] = ('◆', style);
    }

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), rect);

    if let Some(winner) = game.winner() {
        let overlay_w = 20u16.min(rect.width);
        let overlay_h = 4u16;
        let popup = Rect {
            x: rect.x + (rect.width.saturating_sub(overlay_w)) / 2,
            y: rect.y + (rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new(vec![
            Line::styled(
                format!("{} WINS!", winner.name()),
                Style::default()
                    .fg(player_color(winner))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw("Press r to reset"),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, popup);
        frame.render_widget(overlay, popup);
    }
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let board = game.board();
    let status = match game.phase() {
        Phase::Won(_) => "WON",
        Phase::Playing if board.is_full() => "FULL",
        Phase::Playing => "PLAYING",
    };
    let turn = game.current_player();

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let info = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("{:<8}", "TURN:")),
            Span::styled(turn.name(), Style::default().fg(player_color(turn))),
        ]),
        Line::raw(format!(
            "{:<8}{}/{}",
            "PIECES:",
            board.filled_count(),
            board.len()
        )),
        Line::raw(format!("{:<8}{}", "STATUS:", status)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(info, inner);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![Line::raw("space drop"), Line::raw("r reset")])
        .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![Line::raw("q/esc quit"), Line::raw("")])
        .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
