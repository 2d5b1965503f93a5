//! # Asset Loading
//!
//! Model and material readers (via `tobj`) plus image decoding. Each loader
//! has a fallible `from_file`/`parse` returning a typed error and a `load`
//! wrapper that logs the error and hands back empty or placeholder data, so
//! a missing file never stops the window from rendering.

pub mod mtl;
pub mod obj;
pub mod texture_image;

pub use mtl::{MaterialReference, MtlError};
pub use obj::{ObjError, ObjModel};
pub use texture_image::{TextureError, TextureImage};
