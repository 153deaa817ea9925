//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    /// Character typed into the focused field.
    Input(char),
    Backspace,
    ClearField,
    /// Previous option of a selector (model, corrector).
    PrevOption,
    /// Next option of a selector (model, corrector).
    NextOption,
    AddComponent,
    RemoveComponent,
    ToggleTheme,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c' | 'q') if ctrl => KeyAction::Quit,
        KeyCode::Char('n') if ctrl => KeyAction::AddComponent,
        KeyCode::Char('d') if ctrl => KeyAction::RemoveComponent,
        KeyCode::Char('t') if ctrl => KeyAction::ToggleTheme,
        KeyCode::Char('u') if ctrl => KeyAction::ClearField,
        KeyCode::Char(_) if ctrl => KeyAction::None,
        KeyCode::Char(c) => KeyAction::Input(c),
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Left => KeyAction::PrevOption,
        KeyCode::Right => KeyAction::NextOption,
        KeyCode::Backspace => KeyAction::Backspace,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(map_key(ctrl('c')), KeyAction::Quit);
        assert_eq!(map_key(ctrl('q')), KeyAction::Quit);
    }

    #[test]
    fn plain_q_is_text() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Input('q'));
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::PrevField);
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::PrevField);
    }

    #[test]
    fn option_keys() {
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::PrevOption);
        assert_eq!(map_key(key(KeyCode::Right)), KeyAction::NextOption);
    }

    #[test]
    fn component_keys() {
        assert_eq!(map_key(ctrl('n')), KeyAction::AddComponent);
        assert_eq!(map_key(ctrl('d')), KeyAction::RemoveComponent);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(map_key(key(KeyCode::Char('7'))), KeyAction::Input('7'));
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(map_key(ctrl('u')), KeyAction::ClearField);
    }

    #[test]
    fn theme_key() {
        assert_eq!(map_key(ctrl('t')), KeyAction::ToggleTheme);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::F(5))), KeyAction::None);
        assert_eq!(map_key(ctrl('z')), KeyAction::None);
    }
}
