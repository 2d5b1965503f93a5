// src/lib.rs
//! Turntable
//!
//! Two small wgpu/winit demos that spin, move and scale a model from the
//! keyboard: a pair of colored cubes and a textured OBJ model.

pub mod app;
pub mod assets;
pub mod config;
pub mod gfx;
pub mod input;
pub mod transform;
pub mod wgpu_utils;

pub use app::TurntableApp;
pub use config::{ProgramConfig, SceneKind};

/// Opens the window described by `config` and runs it to completion
pub fn run(config: ProgramConfig) -> anyhow::Result<()> {
    TurntableApp::new(config)?.run()
}
