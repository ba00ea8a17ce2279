//! Terminal rendering (ratatui scenes) for the trivia game.

pub mod game_scene;
pub mod loading_scene;
pub mod result_scene;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(v_chunks[1]);

    h_chunks[1]
}
