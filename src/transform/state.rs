//! Interactive transform parameters
//!
//! [`TransformState`] is the single mutable value the keyboard drives. It is
//! owned by the application, mutated by the
//! [`TransformController`](crate::input::TransformController) and read by the
//! frame composer once per frame.

use cgmath::Vector3;

/// Uniform scale applied on startup and after a reset
pub const DEFAULT_SCALE: f32 = 0.5;

/// Amount a scale key adds or removes per press
pub const SCALE_STEP: f32 = 0.1;

/// Amount a translate key moves the model per press or repeat
pub const TRANSLATE_STEP: f32 = 0.01;

/// Axis the model spins around, if any
///
/// Holding a single enum value makes "at most one axis active" a property of
/// the type rather than something every caller has to maintain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationAxis {
    #[default]
    None,
    X,
    Y,
    Z,
}

impl RotationAxis {
    /// Unit vector for the axis, `None` when no rotation is active
    pub fn unit_vector(self) -> Option<Vector3<f32>> {
        match self {
            RotationAxis::None => None,
            RotationAxis::X => Some(Vector3::unit_x()),
            RotationAxis::Y => Some(Vector3::unit_y()),
            RotationAxis::Z => Some(Vector3::unit_z()),
        }
    }
}

/// Sign applied to the time-derived rotation angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationDirection {
    #[default]
    Forward,
    /// No key binding selects this. The field and the composition logic
    /// that reads it are kept so the behavior stays reproducible.
    Reverse,
}

impl RotationDirection {
    pub fn sign(self) -> f32 {
        match self {
            RotationDirection::Forward => 1.0,
            RotationDirection::Reverse => -1.0,
        }
    }
}

/// Current scale, translation and rotation selection for the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Uniform scale factor. Unbounded: repeated decrements reach zero and
    /// then go negative, which mirrors the model through the origin.
    pub scale: f32,
    /// Cumulative offset in model space
    pub translation: Vector3<f32>,
    pub rotation_axis: RotationAxis,
    pub rotation_direction: RotationDirection,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation_axis: RotationAxis::None,
            rotation_direction: RotationDirection::Forward,
        }
    }
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `axis` the only active rotation, spinning forward
    pub fn select_axis(&mut self, axis: RotationAxis) {
        self.clear_rotation();
        self.rotation_axis = axis;
    }

    /// Stops any rotation and drops a reverse direction
    pub fn clear_rotation(&mut self) {
        self.rotation_axis = RotationAxis::None;
        self.rotation_direction = RotationDirection::Forward;
    }

    pub fn adjust_scale(&mut self, delta: f32) {
        self.scale += delta;
    }

    pub fn translate(&mut self, delta: Vector3<f32>) {
        self.translation += delta;
    }

    /// Restores startup values: no rotation, zero offset, default scale
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
