//! Small wgpu helpers shared by the render engine and scene objects

pub mod binding_types;
pub mod uniform_buffer;

pub use uniform_buffer::{MatrixUniform, UniformBuffer};
