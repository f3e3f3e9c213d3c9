//! Race scene rendering.
//!
//! One frame per tick: a bordered header with the bankroll and the odds
//! line, then a textual progress-bar row per horse. The current leader's
//! row is highlighted.

use crate::constants::{HORSE_GLYPHS, TRACK_LENGTH};
use crate::odds::OddsBoard;
use crate::ui::format_money;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders one race frame.
pub fn draw(frame: &mut Frame, board: &OddsBoard, balance: f64, positions: &[f64]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(frame.size());

    draw_header(frame, chunks[0], board, balance);
    draw_track(frame, chunks[1], positions);
}

fn draw_header(frame: &mut Frame, area: Rect, board: &OddsBoard, balance: f64) {
    let odds_line = (0..board.horse_count())
        .map(|h| format!("{}:{:.2}", h + 1, board.fair_odds(h)))
        .collect::<Vec<_>>()
        .join("  ");

    let lines = vec![
        Line::from(format!("💰 Balance: $ {}", format_money(balance))),
        Line::from(format!("📈 Odds: {}", odds_line)),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🐎 Horse Race Simulator 🏇 "),
    );
    frame.render_widget(header, area);
}

fn draw_track(frame: &mut Frame, area: Rect, positions: &[f64]) {
    let leader = leading_horse(positions);

    let rows: Vec<Line> = positions
        .iter()
        .enumerate()
        .map(|(horse, &pos)| {
            let style = if Some(horse) == leader {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::styled(track_row(horse, pos), style)
        })
        .collect();

    let track = Paragraph::new(rows).block(Block::default().borders(Borders::ALL));
    frame.render_widget(track, area);
}

/// Builds one horse's track row: dots for ground covered, the horse glyph,
/// then open track up to the finish post.
fn track_row(horse: usize, pos: f64) -> String {
    let track = TRACK_LENGTH as usize;
    let covered = (pos as usize).min(track);
    format!(
        "Horse {:>2} {}: {}{}{}| FINISH",
        horse + 1,
        HORSE_GLYPHS[horse],
        "·".repeat(covered),
        HORSE_GLYPHS[horse],
        " ".repeat(track - covered),
    )
}

fn leading_horse(positions: &[f64]) -> Option<usize> {
    let mut leader = None;
    let mut best = f64::NEG_INFINITY;
    for (horse, &pos) in positions.iter().enumerate() {
        if pos > best {
            best = pos;
            leader = Some(horse);
        }
    }
    leader
}
