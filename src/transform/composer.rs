//! Per-frame model matrix composition
//!
//! The two demos build their model matrix in different orders. Both orders
//! are kept as [`CompositionOrder`] variants; swapping them changes what is
//! on screen, so neither is treated as the canonical one.

use cgmath::{Matrix4, Rad, SquareMatrix};

use super::state::TransformState;

/// Order in which rotation, translation and scale are multiplied together
///
/// Each step right-multiplies the running matrix (starting from identity), so
/// the last factor listed is the first one applied to local geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionOrder {
    /// `R * T * S`, used by the dual-cube scene.
    ///
    /// Vertices are scaled, then offset, then spun around the world origin.
    /// The angle sign follows [`RotationDirection`](super::RotationDirection).
    RotateTranslateScale,
    /// `T * R * S`, used by the textured-model scene.
    ///
    /// Vertices are scaled, spun in place, then offset. This scene has no
    /// reverse mode, so the rotation direction is ignored.
    TranslateRotateScale,
}

/// Builds the model matrix for time `now` (seconds since startup)
///
/// The angle is `now` radians, never wrapped; trigonometric periodicity
/// keeps the motion continuous. Pure: identical inputs give identical output.
pub fn compute_model_matrix(
    now: f32,
    state: &TransformState,
    order: CompositionOrder,
) -> Matrix4<f32> {
    let translation = Matrix4::from_translation(state.translation);
    let scale = Matrix4::from_scale(state.scale);

    match order {
        CompositionOrder::RotateTranslateScale => {
            let angle = now * state.rotation_direction.sign();
            rotation(state, angle) * translation * scale
        }
        CompositionOrder::TranslateRotateScale => translation * rotation(state, now) * scale,
    }
}

fn rotation(state: &TransformState, angle: f32) -> Matrix4<f32> {
    match state.rotation_axis.unit_vector() {
        Some(axis) => Matrix4::from_axis_angle(axis, Rad(angle)),
        None => Matrix4::identity(),
    }
}
