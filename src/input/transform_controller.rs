use winit::{
    event::KeyEvent,
    keyboard::{KeyCode, PhysicalKey},
};

use super::{bindings::KeyBindings, key_action::KeyAction};
use crate::transform::{RotationAxis, TransformState, SCALE_STEP, TRANSLATE_STEP};

/// What the window should do after a key was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    Continue,
    ExitRequested,
}

/// Applies key events to a [`TransformState`] according to a layout
///
/// Scale, axis selection, reset and quit react to `Press` only. Translation
/// reacts to `Press` and `Repeat`, so holding a translate key keeps moving
/// the model while holding a scale key changes it exactly once.
pub struct TransformController {
    bindings: KeyBindings,
}

impl TransformController {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    /// Entry point for winit keyboard events
    ///
    /// `KeyEvent` cannot be built outside winit, so the event is reduced to
    /// its physical key and [`KeyAction`] before anything else happens.
    pub fn process_key_event(&self, event: &KeyEvent, state: &mut TransformState) -> KeyResponse {
        self.on_physical_key(event.physical_key, KeyAction::from_key_event(event), state)
    }

    /// Keys without a platform-independent code are ignored
    pub fn on_physical_key(
        &self,
        key: PhysicalKey,
        action: KeyAction,
        state: &mut TransformState,
    ) -> KeyResponse {
        match key {
            PhysicalKey::Code(key) => self.on_key_event(key, action, state),
            PhysicalKey::Unidentified(_) => KeyResponse::Continue,
        }
    }

    pub fn on_key_event(
        &self,
        key: KeyCode,
        action: KeyAction,
        state: &mut TransformState,
    ) -> KeyResponse {
        let b = &self.bindings;

        if action == KeyAction::Press {
            if key == b.quit {
                return KeyResponse::ExitRequested;
            }

            if key == b.scale_up {
                state.adjust_scale(SCALE_STEP);
            } else if key == b.scale_down {
                state.adjust_scale(-SCALE_STEP);
            }

            if let Some(axis) = self.axis_for(key) {
                state.select_axis(axis);
                log::debug!("Rotating about {:?}", axis);
            }

            if b.reset == Some(key) {
                state.reset();
                log::debug!("Transform reset");
            }
        }

        if action.is_down() {
            if let Some(direction) = b.translate_direction(key) {
                state.translate(direction * TRANSLATE_STEP);
            }
        }

        KeyResponse::Continue
    }

    fn axis_for(&self, key: KeyCode) -> Option<RotationAxis> {
        let b = &self.bindings;
        if key == b.rotate_x {
            Some(RotationAxis::X)
        } else if key == b.rotate_y {
            Some(RotationAxis::Y)
        } else if key == b.rotate_z {
            Some(RotationAxis::Z)
        } else {
            None
        }
    }
}
