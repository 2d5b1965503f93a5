//! # Transform Module
//!
//! Keyboard-driven model transform: the mutable [`TransformState`] and the
//! pure [`compute_model_matrix`] that turns it into a matrix every frame.

pub mod composer;
pub mod state;

pub use composer::{compute_model_matrix, CompositionOrder};
pub use state::{
    RotationAxis, RotationDirection, TransformState, DEFAULT_SCALE, SCALE_STEP, TRANSLATE_STEP,
};
