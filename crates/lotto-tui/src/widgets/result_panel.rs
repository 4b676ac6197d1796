// Result panel: the last drawn numbers, or the last error in their place.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(content(state))
        .block(Block::default().borders(Borders::ALL).title("Result"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Lines shown inside the panel.
pub fn content(state: &ViewState) -> Vec<Line<'static>> {
    if let Some(ref message) = state.error {
        return vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))];
    }

    if state.numbers.is_empty() {
        return vec![Line::from(Span::styled(
            "Select a game and press Enter to draw.",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    vec![
        Line::from(Span::styled(
            state.game_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            state.numbers.clone(),
            Style::default().fg(Color::Yellow),
        )),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
