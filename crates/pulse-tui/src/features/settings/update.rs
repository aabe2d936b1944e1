use crossterm::event::{KeyCode, KeyEvent};
use pulse_core::preferences::{Preference, Preferences};

use crate::statusline::Notice;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SettingsState {
    pub cursor: usize,
}

impl SettingsState {
    pub fn current(&self) -> Preference {
        Preference::ALL[self.cursor.min(Preference::ALL.len() - 1)]
    }
}

/// Handles a key while the settings pane has focus.
///
/// Returns a notice describing a toggled preference, if any.
pub fn handle_key(
    state: &mut SettingsState,
    prefs: &mut Preferences,
    key: KeyEvent,
) -> Option<Notice> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.cursor = state.cursor.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.cursor + 1 < Preference::ALL.len() {
                state.cursor += 1;
            }
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let pref = state.current();
            let enabled = prefs.toggle(pref);
            tracing::info!(preference = pref.label(), enabled, "preference toggled");
            let status = if enabled { "on" } else { "off" };
            Some(Notice::new(format!("{} {status}", pref.label())))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_toggle_current_preference() {
        let mut state = SettingsState::default();
        let mut prefs = Preferences::default();

        let notice = handle_key(&mut state, &mut prefs, key(KeyCode::Char(' ')));
        assert!(!prefs.dark_mode);
        assert_eq!(notice.map(|n| n.text), Some("Dark mode off".to_string()));

        handle_key(&mut state, &mut prefs, key(KeyCode::Down));
        handle_key(&mut state, &mut prefs, key(KeyCode::Enter));
        assert!(!prefs.notifications);
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = SettingsState::default();
        let mut prefs = Preferences::default();
        for _ in 0..5 {
            handle_key(&mut state, &mut prefs, key(KeyCode::Down));
        }
        assert_eq!(state.cursor, Preference::ALL.len() - 1);
        handle_key(&mut state, &mut prefs, key(KeyCode::Up));
        handle_key(&mut state, &mut prefs, key(KeyCode::Up));
        assert_eq!(state.cursor, 0);
    }
}
