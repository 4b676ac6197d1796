// Status bar and help bar: selected game, draw counter, key hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ViewState;

/// Key hints shown in the help bar.
pub const HELP_TEXT: &str = " Enter:Draw | Up/Down:Select | 1-9:Jump | q:Quit";

/// Render the status bar into the given area.
///
/// Layout: [app name] | [selected game description] | [draw counter]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            " Lotto ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::Gray)),
    ];

    spans.push(Span::styled(
        selection_text(state),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.push(Span::styled(
        format!("Draws: {}", state.draws),
        Style::default().fg(Color::White),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// e.g. `Lotto: 6 numbers from 1 to 49`, or a hint when nothing is selectable.
pub fn selection_text(state: &ViewState) -> String {
    match state.selected_game() {
        Some(game) => format!("{}: {}", game.label, game.summary),
        None => "No games configured".to_string(),
    }
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        HELP_TEXT,
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::screen_text;
    use lotto_core::PresetRegistry;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn selection_text_describes_selected_game() {
        let mut state = ViewState::new(&PresetRegistry::builtin());
        assert_eq!(selection_text(&state), "Lotto: 6 numbers from 1 to 49");
        state.select(1);
        assert_eq!(selection_text(&state), "MultiMulti: 10 numbers from 1 to 80");
    }

    #[test]
    fn selection_text_without_games() {
        assert_eq!(selection_text(&ViewState::default()), "No games configured");
    }

    #[test]
    fn render_shows_draw_counter() {
        let mut state = ViewState::new(&PresetRegistry::builtin());
        state.draws = 3;
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Draws: 3"), "{text}");
    }
}
