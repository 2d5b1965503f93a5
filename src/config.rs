//! Per-demo program settings
//!
//! Both binaries share the same application shell and differ only in the
//! [`ProgramConfig`] they hand to it.

use std::{
    ffi::OsString,
    path::PathBuf,
};

use cgmath::Vector3;

use crate::{input::KeyBindings, transform::CompositionOrder};

/// Environment variable that replaces the textured demo's model path
pub const MODEL_PATH_ENV: &str = "TURNTABLE_MODEL";

pub const DEFAULT_MODEL_PATH: &str = "assets/Suzanne/bola.obj";

/// What gets drawn and how its GPU resources are laid out
#[derive(Debug, Clone, PartialEq)]
pub enum SceneKind {
    /// A colored cube drawn twice, the second copy shifted by `second_offset`
    /// in the first cube's local frame
    DualCube { second_offset: Vector3<f32> },
    /// One OBJ model with its diffuse texture
    TexturedModel { model_path: PathBuf },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: wgpu::Color,
    pub bindings: KeyBindings,
    pub composition: CompositionOrder,
    pub scene: SceneKind,
}

impl ProgramConfig {
    pub fn dual_cube() -> Self {
        Self {
            title: "Dual Cube - Transform Demo".to_string(),
            width: 1000,
            height: 1000,
            clear_color: wgpu::Color::WHITE,
            bindings: KeyBindings::dual_cube(),
            composition: CompositionOrder::RotateTranslateScale,
            scene: SceneKind::DualCube {
                second_offset: Vector3::new(1.5, 0.0, 0.0),
            },
        }
    }

    /// Textured demo, honoring [`MODEL_PATH_ENV`] for the model location
    pub fn textured_model() -> Self {
        Self::textured_model_at(model_path_from(std::env::var_os(MODEL_PATH_ENV)))
    }

    pub fn textured_model_at(model_path: PathBuf) -> Self {
        Self {
            title: "Textured Model - Transform Demo".to_string(),
            width: 800,
            height: 700,
            clear_color: wgpu::Color::WHITE,
            bindings: KeyBindings::textured_model(),
            composition: CompositionOrder::TranslateRotateScale,
            scene: SceneKind::TexturedModel { model_path },
        }
    }
}

fn model_path_from(value: Option<OsString>) -> PathBuf {
    match value {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_MODEL_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_cube_defaults() {
        let config = ProgramConfig::dual_cube();
        assert_eq!((config.width, config.height), (1000, 1000));
        assert_eq!(config.title, "Dual Cube - Transform Demo");
        assert_eq!(config.clear_color, wgpu::Color::WHITE);
        assert_eq!(config.composition, CompositionOrder::RotateTranslateScale);
        assert_eq!(config.bindings, KeyBindings::dual_cube());
        assert_eq!(
            config.scene,
            SceneKind::DualCube {
                second_offset: Vector3::new(1.5, 0.0, 0.0)
            }
        );
    }

    #[test]
    fn test_textured_model_defaults() {
        let config = ProgramConfig::textured_model_at(PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!((config.width, config.height), (800, 700));
        assert_eq!(config.title, "Textured Model - Transform Demo");
        assert_eq!(config.composition, CompositionOrder::TranslateRotateScale);
        assert_eq!(config.bindings.reset, Some(winit::keyboard::KeyCode::KeyP));
        assert_eq!(
            config.scene,
            SceneKind::TexturedModel {
                model_path: PathBuf::from(DEFAULT_MODEL_PATH)
            }
        );
    }

    #[test]
    fn test_model_path_override() {
        assert_eq!(model_path_from(None), PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(
            model_path_from(Some(OsString::new())),
            PathBuf::from(DEFAULT_MODEL_PATH)
        );
        assert_eq!(
            model_path_from(Some(OsString::from("/tmp/teapot.obj"))),
            PathBuf::from("/tmp/teapot.obj")
        );
    }
}
