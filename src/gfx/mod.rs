//! # Graphics Module
//!
//! Everything between the transform matrix and the pixels on screen.
//!
//! - **Geometry** ([`geometry`]) - CPU-side vertex arrays and the colored cube
//! - **Rendering** ([`rendering`]) - surface, pipelines and frame drawing
//! - **Resources** ([`resources`]) - depth buffer, diffuse texture, projection
//! - **Scene** ([`scene`]) - GPU meshes and their per-instance uniforms
//!
//! The [`RenderEngine`] is created by the application once the window
//! exists; it then builds the [`Scene`](scene::Scene) for the configured
//! [`SceneKind`](crate::config::SceneKind).

pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

pub use rendering::render_engine::RenderEngine;
