//! # Scene Management Module
//!
//! What gets drawn: one [`Object`] (a GPU [`Mesh`] plus one or more
//! [`ObjectInstance`]s, each with its own model-matrix uniform) and, for the
//! textured model, the projection and texture bindings.
//!
//! - [`Scene`] - built from a [`SceneKind`](crate::config::SceneKind)
//! - [`ModelAssets`] - OBJ, material and texture loaded from disk
//! - [`DrawObject`] - draw helpers on `wgpu::RenderPass`
//! - [`ColoredVertex`] / [`TexturedVertex`] - vertex formats

pub mod object;
pub mod scene;
pub mod vertex;

pub use object::{instance_matrix, DrawObject, Mesh, Object, ObjectInstance};
pub use scene::{ModelAssets, Scene, TexturedBindings};
pub use vertex::{ColoredVertex, TexturedVertex};
