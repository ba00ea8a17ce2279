//! End-of-playthrough screens: the game-over medal card and the win card.

use super::centered_rect;
use crate::profile::Profile;
use crate::trivia::levels::level_for_score;
use crate::trivia::types::TriviaGame;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the game-over card with the medal rank earned by the final score.
pub fn render_game_over(frame: &mut Frame, area: Rect, game: &TriviaGame, profile: &Profile) {
    let snapshot = game.snapshot();
    let level = level_for_score(snapshot.score);

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("{}  {}", level.medal, level.title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("\"{}\"", level.phrase),
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        score_line("Your Score", snapshot.score, Color::Yellow),
        Line::from(vec![
            Span::styled("Progress: ", Style::default().fg(Color::Gray)),
            Span::raw(format!(
                "{} / {} words attempted",
                snapshot.words_used, snapshot.words_total
            )),
        ]),
        score_line("Best", profile.high_score, Color::Cyan),
        Line::from(""),
        Line::styled(
            "[R] Play Again   [Q] Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    render_card(frame, area, " Game Over ", Color::Red, lines);
}

/// Render the win card shown after every word has been mastered.
pub fn render_win(frame: &mut Frame, area: Rect, game: &TriviaGame, profile: &Profile) {
    let snapshot = game.snapshot();

    let lines = vec![
        Line::from(""),
        Line::styled(
            "🏆  Congratulations!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "You completed all words!",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        score_line("Perfect Score", snapshot.score, Color::Green),
        Line::from(vec![
            Span::styled("Mastered: ", Style::default().fg(Color::Gray)),
            Span::raw(format!(
                "{} / {} words",
                snapshot.words_total, snapshot.words_total
            )),
        ]),
        Line::from(vec![
            Span::styled("Lives remaining: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} ♥", snapshot.lives),
                Style::default().fg(Color::Red),
            ),
        ]),
        score_line("Best", profile.high_score, Color::Cyan),
        Line::from(""),
        Line::styled(
            "[R] Play Again   [Q] Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    render_card(frame, area, " You Win! ", Color::Green, lines);
}

fn score_line(label: &str, value: u32, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, border: Color, lines: Vec<Line>) {
    let height = lines.len() as u16 + 2;
    let card = centered_rect(area, 52, height);
    frame.render_widget(Clear, card);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, card);
}
