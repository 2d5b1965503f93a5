use std::path::Path;

use cgmath::Matrix4;
use wgpu::Device;

use crate::{
    assets::{MaterialReference, ObjModel, TextureImage},
    config::SceneKind,
    gfx::{
        geometry::primitives::colored_cube,
        resources::{projection_matrix, GlobalBindings, TextureResource},
    },
};

use super::object::{Mesh, Object, ObjectInstance};

/// CPU-side data for the textured scene: geometry plus decoded texture
///
/// The chain model → `mtllib` → `map_Kd` → image is followed as far as it
/// goes. Every broken link is logged and replaced by empty geometry or the
/// placeholder texture.
pub struct ModelAssets {
    pub model: ObjModel,
    pub texture: TextureImage,
}

impl ModelAssets {
    pub fn load(model_path: &Path) -> Self {
        let model = ObjModel::load(model_path);

        let texture = match model.material_path(model_path) {
            Some(material_path) => {
                let material = MaterialReference::load(&material_path);
                match material.texture_path(&material_path) {
                    Some(texture_path) => TextureImage::load(texture_path),
                    None => TextureImage::placeholder(),
                }
            }
            None => {
                log::warn!("Model {:?} names no material library", model_path);
                TextureImage::placeholder()
            }
        };

        Self { model, texture }
    }
}

/// Bindings only the textured scene has
pub struct TexturedBindings {
    pub globals: GlobalBindings,
    pub texture: TextureResource,
    pub texture_layout: wgpu::BindGroupLayout,
    pub texture_bind_group: wgpu::BindGroup,
}

/// Everything drawn each frame
pub struct Scene {
    pub object: Object,
    pub textured: Option<TexturedBindings>,
}

impl Scene {
    pub fn new(
        device: &Device,
        queue: &wgpu::Queue,
        kind: &SceneKind,
        transform_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        match kind {
            SceneKind::DualCube { second_offset } => {
                let cube = colored_cube();
                let mesh = Mesh::new(device, &cube.to_vertices(), "Cube Vertex Buffer");
                let instances = vec![
                    ObjectInstance::new(device, transform_layout, None),
                    ObjectInstance::new(device, transform_layout, Some(*second_offset)),
                ];
                log::info!("Dual cube scene: {} triangles per cube", cube.triangle_count());

                Scene {
                    object: Object { mesh, instances },
                    textured: None,
                }
            }
            SceneKind::TexturedModel { model_path } => {
                let assets = ModelAssets::load(model_path);
                let mesh = Mesh::new(
                    device,
                    &assets.model.geometry.to_vertices(),
                    "Model Vertex Buffer",
                );
                let instances = vec![ObjectInstance::new(device, transform_layout, None)];

                let globals = GlobalBindings::new(device, projection_matrix());
                let texture =
                    TextureResource::create_diffuse(device, queue, &assets.texture, "Diffuse Texture");
                let texture_layout = TextureResource::bind_group_layout(device);
                let texture_bind_group = texture.create_bind_group(device, &texture_layout);

                Scene {
                    object: Object { mesh, instances },
                    textured: Some(TexturedBindings {
                        globals,
                        texture,
                        texture_layout,
                        texture_bind_group,
                    }),
                }
            }
        }
    }

    /// Writes this frame's model matrix into every instance's uniform
    pub fn update(&mut self, queue: &wgpu::Queue, model: Matrix4<f32>) {
        self.object.update_transforms(queue, model);
    }

    /// Bind group layouts in pipeline order, and the group index of the
    /// per-instance model matrix
    pub fn pipeline_layouts(
        &self,
        transform_layout: &wgpu::BindGroupLayout,
    ) -> (Vec<wgpu::BindGroupLayout>, u32) {
        match &self.textured {
            Some(textured) => (
                vec![
                    textured.globals.bind_group_layout().clone(),
                    transform_layout.clone(),
                    textured.texture_layout.clone(),
                ],
                1,
            ),
            None => (vec![transform_layout.clone()], 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("turntable-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        image::RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]))
            .save(path)
            .unwrap();
    }

    const TRIANGLE: &str = "mtllib tri.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 0 1\nvn 0 0 1\nf 1/1/1 2/2/1 3/3/1\n";

    #[test]
    fn test_full_chain_resolves_relative_to_model() {
        let dir = fixture_dir("chain");
        fs::write(dir.join("tri.obj"), TRIANGLE).unwrap();
        fs::write(dir.join("tri.mtl"), "newmtl m\nmap_Kd skin.png\n").unwrap();
        write_png(&dir.join("skin.png"), 4, 4);

        let assets = ModelAssets::load(&dir.join("tri.obj"));
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(assets.model.geometry.vertex_count(), 3);
        assert!(!assets.texture.is_placeholder);
        assert_eq!(assets.texture.width(), 4);
        assert_eq!(assets.texture.mip_level_count(), 3);
    }

    #[test]
    fn test_missing_texture_uses_placeholder() {
        let dir = fixture_dir("notex");
        fs::write(dir.join("tri.obj"), TRIANGLE).unwrap();
        fs::write(dir.join("tri.mtl"), "newmtl m\nmap_Kd gone.png\n").unwrap();

        let assets = ModelAssets::load(&dir.join("tri.obj"));
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(assets.model.geometry.vertex_count(), 3);
        assert!(assets.texture.is_placeholder);
    }

    #[test]
    fn test_missing_model_yields_empty_scene_data() {
        let dir = fixture_dir("nomodel");
        let assets = ModelAssets::load(&dir.join("absent.obj"));
        fs::remove_dir_all(&dir).unwrap();

        assert!(assets.model.geometry.is_empty());
        assert!(assets.texture.is_placeholder);
    }
}
