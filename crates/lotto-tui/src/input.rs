// Keyboard input handling.
//
// Translates crossterm key events into an `Action` for the event loop, or
// into local ViewState mutations (selection movement).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;

/// What the event loop should do in response to a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Draw numbers for the named game.
    Draw(String),
    Quit,
}

/// Handle a keyboard event.
///
/// Returns `None` when the key was handled locally or ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<Action> {
    // On Windows crossterm reports both Press and Release for each keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Up | KeyCode::Char('k') => {
            view_state.select_previous();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.select_next();
            None
        }
        KeyCode::Home => {
            view_state.select(0);
            None
        }
        KeyCode::End => {
            view_state.select(view_state.games.len().saturating_sub(1));
            None
        }

        // 1-9 jump straight to a game.
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            view_state.select(index);
            None
        }

        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char(' ') => view_state
            .selected_game()
            .map(|game| Action::Draw(game.name.clone())),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_core::PresetRegistry;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> ViewState {
        ViewState::new(&PresetRegistry::builtin())
    }

    #[test]
    fn enter_draws_selected_game() {
        let mut s = state();
        assert_eq!(
            handle_key(key(KeyCode::Enter), &mut s),
            Some(Action::Draw("lotto".into()))
        );
        s.select(2);
        assert_eq!(
            handle_key(key(KeyCode::Char('g')), &mut s),
            Some(Action::Draw("minilotto".into()))
        );
    }

    #[test]
    fn arrows_and_vim_keys_move_selection() {
        let mut s = state();
        assert_eq!(handle_key(key(KeyCode::Down), &mut s), None);
        assert_eq!(s.selected, 1);
        handle_key(key(KeyCode::Char('j')), &mut s);
        assert_eq!(s.selected, 2);
        handle_key(key(KeyCode::Char('k')), &mut s);
        assert_eq!(s.selected, 1);
        handle_key(key(KeyCode::Up), &mut s);
        handle_key(key(KeyCode::Up), &mut s);
        assert_eq!(s.selected, 2, "selection wraps to the bottom");
    }

    #[test]
    fn home_end_and_digits_jump() {
        let mut s = state();
        handle_key(key(KeyCode::End), &mut s);
        assert_eq!(s.selected, 2);
        handle_key(key(KeyCode::Home), &mut s);
        assert_eq!(s.selected, 0);
        handle_key(key(KeyCode::Char('2')), &mut s);
        assert_eq!(s.selected, 1);
        handle_key(key(KeyCode::Char('9')), &mut s);
        assert_eq!(s.selected, 1, "digit past the list is ignored");
    }

    #[test]
    fn quit_keys() {
        let mut s = state();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut s), Some(Action::Quit));
        assert_eq!(handle_key(key(KeyCode::Esc), &mut s), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut s), Some(Action::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut s = state();
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(handle_key(release, &mut s), None);
    }

    #[test]
    fn enter_with_no_games_does_nothing() {
        let mut s = ViewState::default();
        assert_eq!(handle_key(key(KeyCode::Enter), &mut s), None);
    }
}
