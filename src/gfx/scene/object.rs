use cgmath::{Matrix4, SquareMatrix, Vector3};
use wgpu::Device;

use crate::wgpu_utils::{MatrixUniform, UniformBuffer};

/// An unindexed vertex buffer on the GPU
///
/// Empty geometry gets no buffer at all; drawing such a mesh is a no-op.
pub struct Mesh {
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl Mesh {
    pub fn new<V: bytemuck::Pod>(device: &Device, vertices: &[V], label: &str) -> Self {
        if vertices.is_empty() {
            log::warn!("{} has no vertices, nothing will be drawn", label);
            return Self {
                vertex_buffer: None,
                vertex_count: 0,
            };
        }

        let vertex_buffer = wgpu::util::DeviceExt::create_buffer_init(
            device,
            &wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );

        Self {
            vertex_buffer: Some(vertex_buffer),
            vertex_count: vertices.len() as u32,
        }
    }
}

/// Model matrix for one instance: the shared model matrix followed by the
/// instance's own offset in the model's local frame
pub fn instance_matrix(model: Matrix4<f32>, offset: Option<Vector3<f32>>) -> Matrix4<f32> {
    match offset {
        Some(offset) => model * Matrix4::from_translation(offset),
        None => model,
    }
}

/// One placement of a mesh, with its own model-matrix uniform
///
/// Instances never share a uniform buffer: all queued writes land before the
/// frame's submission executes.
pub struct ObjectInstance {
    pub offset: Option<Vector3<f32>>,
    transform: UniformBuffer<MatrixUniform>,
    transform_bind_group: wgpu::BindGroup,
}

impl ObjectInstance {
    pub fn new(
        device: &Device,
        transform_layout: &wgpu::BindGroupLayout,
        offset: Option<Vector3<f32>>,
    ) -> Self {
        let initial = MatrixUniform::from(instance_matrix(Matrix4::identity(), offset));
        let transform = UniformBuffer::new_with_data(device, "Model Uniform Buffer", &initial);
        let transform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model Bind Group"),
            layout: transform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: transform.binding_resource(),
            }],
        });

        Self {
            offset,
            transform,
            transform_bind_group,
        }
    }

    pub fn update_transform(&mut self, queue: &wgpu::Queue, model: Matrix4<f32>) {
        self.transform
            .update_content(queue, instance_matrix(model, self.offset).into());
    }

    pub fn transform_bind_group(&self) -> &wgpu::BindGroup {
        &self.transform_bind_group
    }
}

/// A mesh and every place it is drawn
pub struct Object {
    pub mesh: Mesh,
    pub instances: Vec<ObjectInstance>,
}

impl Object {
    pub fn update_transforms(&mut self, queue: &wgpu::Queue, model: Matrix4<f32>) {
        for instance in &mut self.instances {
            instance.update_transform(queue, model);
        }
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_instance(&mut self, mesh: &'a Mesh, instance: &'a ObjectInstance, transform_group: u32);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        let Some(vertex_buffer) = &mesh.vertex_buffer else {
            return;
        };
        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.draw(0..mesh.vertex_count, 0..1);
    }

    fn draw_instance(&mut self, mesh: &'b Mesh, instance: &'b ObjectInstance, transform_group: u32) {
        self.set_bind_group(transform_group, instance.transform_bind_group(), &[]);
        self.draw_mesh(mesh);
    }
}
