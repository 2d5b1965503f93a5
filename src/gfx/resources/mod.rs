//! GPU resources: the depth buffer, the diffuse texture and the projection
//! uniform.

pub mod global_bindings;
pub mod texture_resource;

pub use global_bindings::{projection_matrix, GlobalBindings};
pub use texture_resource::{DepthTexture, TextureResource};
