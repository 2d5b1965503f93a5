use winit::event::{ElementState, KeyEvent};

/// Kind of keyboard transition delivered by the window
///
/// `Press` fires once per key-down transition (edge-triggered); `Repeat`
/// fires periodically while the key stays held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

impl KeyAction {
    pub fn from_parts(state: ElementState, repeat: bool) -> Self {
        match (state, repeat) {
            (ElementState::Pressed, false) => KeyAction::Press,
            (ElementState::Pressed, true) => KeyAction::Repeat,
            (ElementState::Released, _) => KeyAction::Release,
        }
    }

    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self::from_parts(event.state, event.repeat)
    }

    /// True for both the initial press and auto-repeat
    pub fn is_down(self) -> bool {
        matches!(self, KeyAction::Press | KeyAction::Repeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_repeat_are_distinct() {
        assert_eq!(
            KeyAction::from_parts(ElementState::Pressed, false),
            KeyAction::Press
        );
        assert_eq!(
            KeyAction::from_parts(ElementState::Pressed, true),
            KeyAction::Repeat
        );
    }

    #[test]
    fn test_release_ignores_repeat_flag() {
        assert_eq!(
            KeyAction::from_parts(ElementState::Released, false),
            KeyAction::Release
        );
        assert_eq!(
            KeyAction::from_parts(ElementState::Released, true),
            KeyAction::Release
        );
    }

    #[test]
    fn test_is_down() {
        assert!(KeyAction::Press.is_down());
        assert!(KeyAction::Repeat.is_down());
        assert!(!KeyAction::Release.is_down());
    }
}
