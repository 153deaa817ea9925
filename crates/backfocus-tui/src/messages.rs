//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Tick event for periodic updates.
    Tick,
    /// System colour scheme reported dark (`true`) or light.
    SystemScheme(bool),
    /// Quit the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants() {
        let msg = TuiMessage::KeyPress(KeyAction::Input('1'));
        assert!(matches!(msg, TuiMessage::KeyPress(KeyAction::Input('1'))));

        let msg = TuiMessage::Resize {
            width: 80,
            height: 24,
        };
        assert!(matches!(msg, TuiMessage::Resize { .. }));

        assert_eq!(TuiMessage::SystemScheme(true), TuiMessage::SystemScheme(true));
        assert_ne!(TuiMessage::Tick, TuiMessage::Quit);
    }
}
