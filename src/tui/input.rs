//! TUI keyboard input handling.
//!
//! The header search box is a controlled input: every keystroke lands in the
//! root search text and re-arms the debounce deadline. Debouncing itself
//! lives in the event loop, not here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, DetailFetch};

/// Handle one key event. Returns `true` when the app should exit.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.modal.is_some() {
        handle_modal_key(app, key);
        return false;
    }

    handle_browse_key(app, key)
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Esc closes in every modal state, like clicking the backdrop.
        KeyCode::Esc => app.close_modal(),
        KeyCode::Enter => {
            // The error view offers an explicit close action.
            let in_error = matches!(
                app.modal.as_ref().map(|m| &m.fetch),
                Some(DetailFetch::Error(_))
            );
            if in_error {
                app.close_modal();
            }
        }
        KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
            if let Some(modal) = app.modal.as_mut() {
                let step: u16 = match key.code {
                    KeyCode::PageUp | KeyCode::PageDown => 10,
                    _ => 1,
                };
                modal.scroll = match key.code {
                    KeyCode::Up | KeyCode::PageUp => modal.scroll.saturating_sub(step),
                    _ => modal.scroll.saturating_add(step),
                };
            }
        }
        _ => {}
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Tab => app.toggle_theme(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Up => app.move_cursor(0, -1),
        KeyCode::Down => app.move_cursor(0, 1),
        KeyCode::Left => app.move_cursor(-1, 0),
        KeyCode::Right => app.move_cursor(1, 0),
        KeyCode::Backspace => {
            if app.search.pop().is_some() {
                app.arm_search_debounce();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search.push(c);
            app.arm_search_debounce();
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_edits_search_and_arms_debounce() {
        let mut app = App::new(&Config::default());
        assert!(app.search_deadline.is_none());
        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Char('o')));
        handle_key(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.search, "dom");
        assert!(app.search_deadline.is_some());

        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.search, "do");
    }

    #[test]
    fn test_backspace_on_empty_does_not_arm() {
        let mut app = App::new(&Config::default());
        handle_key(&mut app, key(KeyCode::Backspace));
        assert!(app.search_deadline.is_none());
    }

    #[test]
    fn test_esc_closes_modal_before_quitting() {
        let mut app = App::new(&Config::default());
        app.games =
            vec![serde_json::from_str(r#"{"id": 1, "name": "Portal"}"#).unwrap()];
        app.open_detail();

        assert!(!handle_key(&mut app, key(KeyCode::Esc)));
        assert!(app.modal.is_none());

        assert!(handle_key(&mut app, key(KeyCode::Esc)));
    }

    #[test]
    fn test_tab_toggles_theme() {
        let mut app = App::new(&Config::default());
        let initial = app.dark_mode;
        handle_key(&mut app, key(KeyCode::Tab));
        assert_ne!(app.dark_mode, initial);
    }

    #[test]
    fn test_ctrl_q_quits_from_modal() {
        let mut app = App::new(&Config::default());
        app.games =
            vec![serde_json::from_str(r#"{"id": 1, "name": "Portal"}"#).unwrap()];
        app.open_detail();
        let quit = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        assert!(quit);
    }
}
