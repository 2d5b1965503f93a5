//! Keyboard layouts for the two demos

use cgmath::Vector3;
use winit::keyboard::KeyCode;

/// A translate key and the unit direction it moves the model in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslateBinding {
    pub key: KeyCode,
    pub direction: Vector3<f32>,
}

impl TranslateBinding {
    pub fn new(key: KeyCode, x: f32, y: f32, z: f32) -> Self {
        Self {
            key,
            direction: Vector3::new(x, y, z),
        }
    }
}

/// Which physical key triggers which transform edit
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub scale_up: KeyCode,
    pub scale_down: KeyCode,
    pub rotate_x: KeyCode,
    pub rotate_y: KeyCode,
    pub rotate_z: KeyCode,
    /// Six keys for ±X/±Y/±Z, honored on press and repeat
    pub translate: Vec<TranslateBinding>,
    /// Restores the default transform; not every layout has one
    pub reset: Option<KeyCode>,
    pub quit: KeyCode,
}

impl KeyBindings {
    /// `[`/`]` scale, X/Y/Z rotate, A/D W/S I/J translate, Escape quits
    pub fn dual_cube() -> Self {
        Self {
            scale_up: KeyCode::BracketLeft,
            scale_down: KeyCode::BracketRight,
            rotate_x: KeyCode::KeyX,
            rotate_y: KeyCode::KeyY,
            rotate_z: KeyCode::KeyZ,
            translate: vec![
                TranslateBinding::new(KeyCode::KeyA, -1.0, 0.0, 0.0),
                TranslateBinding::new(KeyCode::KeyD, 1.0, 0.0, 0.0),
                TranslateBinding::new(KeyCode::KeyW, 0.0, 1.0, 0.0),
                TranslateBinding::new(KeyCode::KeyS, 0.0, -1.0, 0.0),
                TranslateBinding::new(KeyCode::KeyI, 0.0, 0.0, 1.0),
                TranslateBinding::new(KeyCode::KeyJ, 0.0, 0.0, -1.0),
            ],
            reset: None,
            quit: KeyCode::Escape,
        }
    }

    /// T/R scale, X/Y/Z rotate, P resets, Escape quits
    ///
    /// A and D move along X with the opposite sign to the dual-cube layout;
    /// the projection mirrors the model around Y, so on screen the keys
    /// still move it left and right respectively.
    pub fn textured_model() -> Self {
        Self {
            scale_up: KeyCode::KeyT,
            scale_down: KeyCode::KeyR,
            rotate_x: KeyCode::KeyX,
            rotate_y: KeyCode::KeyY,
            rotate_z: KeyCode::KeyZ,
            translate: vec![
                TranslateBinding::new(KeyCode::KeyD, -1.0, 0.0, 0.0),
                TranslateBinding::new(KeyCode::KeyA, 1.0, 0.0, 0.0),
                TranslateBinding::new(KeyCode::KeyW, 0.0, 1.0, 0.0),
                TranslateBinding::new(KeyCode::KeyS, 0.0, -1.0, 0.0),
                TranslateBinding::new(KeyCode::KeyI, 0.0, 0.0, 1.0),
                TranslateBinding::new(KeyCode::KeyJ, 0.0, 0.0, -1.0),
            ],
            reset: Some(KeyCode::KeyP),
            quit: KeyCode::Escape,
        }
    }

    pub fn translate_direction(&self, key: KeyCode) -> Option<Vector3<f32>> {
        self.translate
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_have_six_translate_keys() {
        assert_eq!(KeyBindings::dual_cube().translate.len(), 6);
        assert_eq!(KeyBindings::textured_model().translate.len(), 6);
    }

    #[test]
    fn test_horizontal_keys_are_inverted_between_layouts() {
        let dual = KeyBindings::dual_cube();
        let textured = KeyBindings::textured_model();

        for key in [KeyCode::KeyA, KeyCode::KeyD] {
            let a = dual.translate_direction(key).unwrap();
            let b = textured.translate_direction(key).unwrap();
            assert_eq!(a, -b);
        }
        for key in [KeyCode::KeyW, KeyCode::KeyS, KeyCode::KeyI, KeyCode::KeyJ] {
            assert_eq!(
                dual.translate_direction(key),
                textured.translate_direction(key)
            );
        }
    }

    #[test]
    fn test_only_textured_layout_resets() {
        assert_eq!(KeyBindings::dual_cube().reset, None);
        assert_eq!(KeyBindings::textured_model().reset, Some(KeyCode::KeyP));
    }

    #[test]
    fn test_unbound_key_has_no_direction() {
        assert_eq!(KeyBindings::dual_cube().translate_direction(KeyCode::KeyQ), None);
    }
}
