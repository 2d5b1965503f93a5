//! Core rendering functionality
//!
//! Pipelines, shaders and per-frame drawing.

pub mod pipeline_manager;
pub mod render_engine;

pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
