use std::marker::PhantomData;

use cgmath::Matrix4;

/// A single column-major 4x4 matrix as the shaders see it
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MatrixUniform {
    pub matrix: [[f32; 4]; 4],
}

impl From<Matrix4<f32>> for MatrixUniform {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self {
            matrix: matrix.into(),
        }
    }
}

/// Typed uniform buffer that remembers its last upload
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    previous_content: Vec<u8>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    pub fn new_with_data(device: &wgpu::Device, label: &str, initial_content: &Content) -> Self {
        let bytes = bytemuck::bytes_of(initial_content);
        let buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytes,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            },
        );

        UniformBuffer {
            buffer,
            content_type: PhantomData,
            previous_content: bytes.to_vec(),
        }
    }

    /// Queues a write unless `content` matches the last upload
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let new_content = bytemuck::bytes_of(&content);
        if self.previous_content == new_content {
            return;
        }
        queue.write_buffer(&self.buffer, 0, new_content);
        self.previous_content = new_content.to_vec();
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{SquareMatrix, Vector3};

    #[test]
    fn test_matrix_uniform_is_column_major() {
        let m = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let uniform = MatrixUniform::from(m);
        assert_eq!(uniform.matrix[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(std::mem::size_of::<MatrixUniform>(), 64);
    }

    #[test]
    fn test_identity_bytes() {
        let uniform = MatrixUniform::from(Matrix4::<f32>::identity());
        let floats: &[f32] = bytemuck::cast_slice(&uniform.matrix);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[5], 1.0);
        assert_eq!(floats[1], 0.0);
    }
}
