//! Results scene rendering.
//!
//! Shown in the alternate screen once the race ends: the full finishing
//! order with medals for the top three places.

use crate::constants::HORSE_GLYPHS;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the finishing order, best first.
pub fn draw(frame: &mut Frame, order: &[usize]) {
    let mut lines = vec![Line::from("")];
    for (place, &horse) in order.iter().enumerate() {
        lines.push(Line::styled(
            format!(
                "  {} Horse {} {}",
                rank_marker(place),
                horse + 1,
                HORSE_GLYPHS[horse]
            ),
            rank_style(place),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Press any key to continue...",
        Style::default().fg(Color::DarkGray),
    ));

    let results = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🎉 Race Results 🎉 "),
    );
    frame.render_widget(results, frame.size());
}

fn rank_marker(place: usize) -> String {
    match place {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        _ => format!("{}.", place + 1),
    }
}

fn rank_style(place: usize) -> Style {
    if place < 3 {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
