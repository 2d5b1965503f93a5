//! # Input Module
//!
//! Turns window keyboard events into edits of the
//! [`TransformState`](crate::transform::TransformState).
//!
//! - [`KeyAction`] - press / repeat / release classification
//! - [`KeyBindings`] - per-demo keyboard layout
//! - [`TransformController`] - applies key events to the state

pub mod bindings;
pub mod key_action;
pub mod transform_controller;

pub use bindings::{KeyBindings, TranslateBinding};
pub use key_action::KeyAction;
pub use transform_controller::{KeyResponse, TransformController};
