//! Loading screen shown while the word catalog is fetched.

use super::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the loading card.
pub fn render_loading(frame: &mut Frame, area: ratatui::layout::Rect) {
    let card = centered_rect(area, 44, 6);
    frame.render_widget(Clear, card);

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Loading Game...",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Preparing your trivia challenge",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(paragraph, card);
}
