//! UI rendering for the active trivia round.
//!
//! Layout: header (lives + score), progress gauge, question card, a 2x2
//! option grid, and a status bar. During the feedback window the grid is
//! recolored from the resolved round instead of accepting input.

use crate::constants::{POINTS_PER_CORRECT, STARTING_LIVES};
use crate::profile::Profile;
use crate::trivia::types::{GamePhase, ResolvedRound, Round, TriviaGame};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

/// Key labels for the four option slots.
pub const OPTION_KEYS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Render the trivia game scene (Playing and RoundResolved phases).
pub fn render_game(frame: &mut Frame, area: Rect, game: &TriviaGame, profile: &Profile) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" EcoLéxico Trivia ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // lives + score
            Constraint::Length(3), // progress gauge
            Constraint::Length(4), // question card
            Constraint::Min(8),    // option grid
            Constraint::Length(2), // status bar
        ])
        .split(inner);

    render_header(frame, chunks[0], game);
    render_progress(frame, chunks[1], game);

    // The round on screen: live during Playing, frozen during feedback.
    let (round, resolved) = match game.phase {
        GamePhase::RoundResolved => match game.resolved.as_ref() {
            Some(resolved) => (&resolved.round, Some(resolved)),
            None => return,
        },
        _ => match game.current_round.as_ref() {
            Some(round) => (round, None),
            None => return,
        },
    };

    render_question(frame, chunks[2], round, profile);
    render_options(frame, chunks[3], round, resolved);
    render_status_bar(frame, chunks[4], resolved);
}

fn render_header(frame: &mut Frame, area: Rect, game: &TriviaGame) {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut spans = vec![Span::styled("Lives: ", Style::default().fg(Color::Gray))];
    for i in 0..STARTING_LIVES {
        let color = if i < game.lives {
            Color::Red
        } else {
            Color::DarkGray
        };
        spans.push(Span::styled("♥ ", Style::default().fg(color)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), h_chunks[0]);

    let score = Paragraph::new(Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::Gray)),
        Span::styled(
            game.score.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(score, h_chunks[1]);
}

fn render_progress(frame: &mut Frame, area: Rect, game: &TriviaGame) {
    let snapshot = game.snapshot();
    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(snapshot.progress.clamp(0.0, 1.0))
        .label(format!(
            "{} / {} words",
            snapshot.words_used, snapshot.words_total
        ));
    frame.render_widget(gauge, area);
}

fn render_question(frame: &mut Frame, area: Rect, round: &Round, profile: &Profile) {
    let mut term_spans = vec![Span::styled(
        round.target.term.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if profile.is_favorite(round.target.id) {
        term_spans.push(Span::styled(" ★", Style::default().fg(Color::Yellow)));
    }

    let lines = vec![
        Line::styled(
            "What does this word mean?",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::from(term_spans),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_options(frame: &mut Frame, area: Rect, round: &Round, resolved: Option<&ResolvedRound>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (col_idx, cell) in cols.iter().enumerate() {
            let option_idx = row_idx * 2 + col_idx;
            let Some(option) = round.options.get(option_idx) else {
                continue;
            };

            let (border_style, text_style, suffix) = match resolved {
                Some(res) if option.id == res.round.target.id => (
                    Style::default().fg(Color::Green),
                    Style::default().fg(Color::Green),
                    " ✓",
                ),
                Some(res) if option.id == res.selected && !res.correct => (
                    Style::default().fg(Color::Red),
                    Style::default().fg(Color::Red),
                    " ✗",
                ),
                Some(_) => (
                    Style::default().fg(Color::DarkGray),
                    Style::default().fg(Color::DarkGray),
                    "",
                ),
                None => (
                    Style::default().fg(Color::White),
                    Style::default().fg(Color::White),
                    "",
                ),
            };

            let key = OPTION_KEYS.get(option_idx).copied().unwrap_or('?');
            let paragraph = Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{}{}", option.meaning, suffix), text_style),
            ]))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
            frame.render_widget(paragraph, *cell);
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, resolved: Option<&ResolvedRound>) {
    let status = match resolved {
        Some(res) if res.correct => Line::styled(
            format!("Correct! +{}", POINTS_PER_CORRECT),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Some(_) => Line::styled(
            "Wrong!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => Line::styled(
            "[A-D] Answer   [F] Favorite   [Q] Quit",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let paragraph = Paragraph::new(status).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
