//! Render pipeline management for wgpu
//!
//! Pipelines are described by a [`PipelineConfig`], registered by name and
//! created together once all are registered. Shader modules are compiled inside a validation error
//! scope so a broken shader is reported through the log and rendering
//! carries on.

use std::{collections::HashMap, sync::Arc};
use wgpu::*;

/// Configuration for creating a render pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub shader: String,
    pub vertex_layout: VertexBufferLayout<'static>,
    pub bind_group_layouts: Vec<BindGroupLayout>,
    pub primitive_topology: PrimitiveTopology,
    pub cull_mode: Option<Face>,
    pub depth_format: Option<TextureFormat>,
    pub depth_compare: CompareFunction,
    pub color_format: TextureFormat,
}

impl PipelineConfig {
    pub fn new(shader: &str, vertex_layout: VertexBufferLayout<'static>) -> Self {
        Self {
            label: format!("{} Pipeline", shader),
            shader: shader.to_string(),
            vertex_layout,
            bind_group_layouts: Vec::new(),
            primitive_topology: PrimitiveTopology::TriangleList,
            cull_mode: None,
            depth_format: None,
            depth_compare: CompareFunction::Less,
            color_format: TextureFormat::Bgra8Unorm,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn with_cull_mode(mut self, face: Option<Face>) -> Self {
        self.cull_mode = face;
        self
    }

    pub fn with_bind_group_layouts(mut self, layouts: Vec<BindGroupLayout>) -> Self {
        self.bind_group_layouts = layouts;
        self
    }

    /// Enables depth testing with depth writes against `format`
    pub fn with_depth_format(mut self, format: TextureFormat) -> Self {
        self.depth_format = Some(format);
        self
    }

    pub fn with_depth_compare(mut self, compare: CompareFunction) -> Self {
        self.depth_compare = compare;
        self
    }

    pub fn with_color_format(mut self, format: TextureFormat) -> Self {
        self.color_format = format;
        self
    }

    pub fn with_primitive_topology(mut self, topology: PrimitiveTopology) -> Self {
        self.primitive_topology = topology;
        self
    }
}

/// Caches shader modules and pipelines by name
pub struct PipelineManager {
    device: Arc<Device>,
    pipelines: HashMap<String, RenderPipeline>,
    pipeline_configs: HashMap<String, PipelineConfig>,
    shader_modules: HashMap<String, ShaderModule>,
    pending_pipelines: Vec<String>,
}

impl PipelineManager {
    pub fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            pipelines: HashMap::new(),
            pipeline_configs: HashMap::new(),
            shader_modules: HashMap::new(),
            pending_pipelines: Vec::new(),
        }
    }

    /// Registers a pipeline configuration without creating it
    pub fn register_pipeline(&mut self, name: &str, config: PipelineConfig) {
        self.pipeline_configs.insert(name.to_string(), config);
        self.pending_pipelines.push(name.to_string());
    }

    /// Compiles a WGSL module
    ///
    /// The module is stored even when validation fails, so pipelines that use
    /// it are still created (and draw nothing useful). The error carries the
    /// compiler diagnostic.
    pub fn load_shader(&mut self, name: &str, source: &str) -> Result<(), String> {
        self.device.push_error_scope(ErrorFilter::Validation);
        let shader_module = self.device.create_shader_module(ShaderModuleDescriptor {
            label: Some(name),
            source: ShaderSource::Wgsl(source.into()),
        });
        let error = pollster::block_on(self.device.pop_error_scope());

        self.shader_modules.insert(name.to_string(), shader_module);
        match error {
            Some(error) => Err(format!("Shader '{}' failed to compile: {}", name, error)),
            None => Ok(()),
        }
    }

    /// Returns an already created pipeline
    pub fn pipeline(&self, name: &str) -> Option<&RenderPipeline> {
        self.pipelines.get(name)
    }

    /// Creates all pending pipelines immediately
    pub fn create_all_pipelines(&mut self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let pending = std::mem::take(&mut self.pending_pipelines);

        for name in pending {
            let Some(config) = self.pipeline_configs.get(&name).cloned() else {
                continue;
            };
            match self.create_pipeline_from_config(&name, &config) {
                Ok(pipeline) => {
                    self.pipelines.insert(name, pipeline);
                }
                Err(e) => {
                    errors.push(format!("Pipeline '{}': {}", name, e));
                    self.pending_pipelines.push(name);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn create_pipeline_from_config(
        &self,
        name: &str,
        config: &PipelineConfig,
    ) -> Result<RenderPipeline, String> {
        let shader = self
            .shader_modules
            .get(&config.shader)
            .ok_or_else(|| format!("Shader '{}' not found", config.shader))?;

        let bind_group_layout_refs: Vec<&BindGroupLayout> =
            config.bind_group_layouts.iter().collect();
        let pipeline_layout = self
            .device
            .create_pipeline_layout(&PipelineLayoutDescriptor {
                label: Some(&format!("{} Layout", name)),
                bind_group_layouts: &bind_group_layout_refs,
                push_constant_ranges: &[],
            });

        let depth_stencil = config.depth_format.map(|format| DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: config.depth_compare,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        });

        let targets = [Some(ColorTargetState {
            format: config.color_format,
            blend: Some(BlendState::REPLACE),
            write_mask: ColorWrites::ALL,
        })];

        self.device.push_error_scope(ErrorFilter::Validation);
        let pipeline = self
            .device
            .create_render_pipeline(&RenderPipelineDescriptor {
                label: Some(&config.label),
                layout: Some(&pipeline_layout),
                vertex: VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[config.vertex_layout.clone()],
                    compilation_options: PipelineCompilationOptions::default(),
                },
                fragment: Some(FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &targets,
                    compilation_options: PipelineCompilationOptions::default(),
                }),
                primitive: PrimitiveState {
                    topology: config.primitive_topology,
                    strip_index_format: None,
                    front_face: FrontFace::Ccw,
                    cull_mode: config.cull_mode,
                    polygon_mode: PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil,
                multisample: MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        match pollster::block_on(self.device.pop_error_scope()) {
            Some(error) => Err(error.to_string()),
            None => Ok(pipeline),
        }
    }

    /// Lists all registered pipeline names
    pub fn list_pipelines(&self) -> Vec<&String> {
        self.pipeline_configs.keys().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::vertex::{ColoredVertex, TexturedVertex};

    #[test]
    fn test_config_defaults() {
        let config = PipelineConfig::new("colored", ColoredVertex::desc());
        assert_eq!(config.label, "colored Pipeline");
        assert_eq!(config.primitive_topology, PrimitiveTopology::TriangleList);
        assert_eq!(config.cull_mode, None);
        assert_eq!(config.depth_format, None);
        assert_eq!(config.depth_compare, CompareFunction::Less);
        assert!(config.bind_group_layouts.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = PipelineConfig::new("textured", TexturedVertex::desc())
            .with_label("Points")
            .with_primitive_topology(PrimitiveTopology::PointList)
            .with_depth_format(TextureFormat::Depth32Float)
            .with_depth_compare(CompareFunction::LessEqual)
            .with_color_format(TextureFormat::Rgba8Unorm)
            .with_cull_mode(Some(Face::Back));

        assert_eq!(config.label, "Points");
        assert_eq!(config.shader, "textured");
        assert_eq!(config.primitive_topology, PrimitiveTopology::PointList);
        assert_eq!(config.depth_format, Some(TextureFormat::Depth32Float));
        assert_eq!(config.depth_compare, CompareFunction::LessEqual);
        assert_eq!(config.color_format, TextureFormat::Rgba8Unorm);
        assert_eq!(config.cull_mode, Some(Face::Back));
        assert_eq!(config.vertex_layout.array_stride, 20);
    }
}
