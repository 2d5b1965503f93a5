//! Projection uniform shared by every textured draw
//!
//! The projection is written once at startup and never updated. It is bound
//! to group 0 of the textured pipeline.

use cgmath::{Deg, Matrix4};

use crate::wgpu_utils::{binding_types, MatrixUniform, UniformBuffer};

pub type ProjectionUBO = UniformBuffer<MatrixUniform>;

/// Fixed projection for the textured model: a half turn about Y
pub fn projection_matrix() -> Matrix4<f32> {
    Matrix4::from_angle_y(Deg(-180.0))
}

pub struct GlobalBindings {
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    _ubo: ProjectionUBO,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device, projection: Matrix4<f32>) -> Self {
        let bind_group_layout =
            binding_types::single_uniform_layout(device, "Projection Bind Group Layout");
        let ubo = ProjectionUBO::new_with_data(
            device,
            "Projection Uniform Buffer",
            &MatrixUniform::from(projection),
        );
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Projection Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        GlobalBindings {
            bind_group_layout,
            bind_group,
            _ubo: ubo,
        }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
