//! wgpu rendering engine
//!
//! Owns the surface, device, depth buffer and pipelines. The scene is kept
//! by the application and handed in every frame.

use std::sync::Arc;

use anyhow::{anyhow, Context};
use wgpu::{Device, TextureFormat};

use crate::{
    config::SceneKind,
    gfx::{
        resources::DepthTexture,
        scene::{
            object::DrawObject,
            scene::Scene,
            vertex::{ColoredVertex, TexturedVertex},
        },
    },
    wgpu_utils::binding_types,
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

const TRIANGLE_PIPELINE: &str = "Triangles";
const POINT_PIPELINE: &str = "Points";

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: DepthTexture,
    format: TextureFormat,
    clear_color: wgpu::Color,
    pub pipeline_manager: PipelineManager,
    transform_layout: wgpu::BindGroupLayout,
    transform_group: u32,
}

impl RenderEngine {
    /// Creates a render engine for the given window
    ///
    /// Fails when no adapter or device is available or the surface cannot be
    /// created.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        clear_color: wgpu::Color,
    ) -> anyhow::Result<RenderEngine> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("Failed to create a rendering surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find a graphics adapter")?;

        let info = adapter.get_info();
        log::info!("Renderer: {} ({:?})", info.name, info.backend);
        log::info!("Driver: {} {}", info.driver, info.driver_info);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("Failed to request a device")?;

        device.on_uncaptured_error(Box::new(|error: wgpu::Error| {
            log::error!("GPU error: {}", error);
        }));

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or_else(|| anyhow!("Surface is incompatible with the adapter"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = DepthTexture::create(&device, &config, "depth_texture");

        let transform_layout =
            binding_types::single_uniform_layout(&device, "Model Bind Group Layout");

        let device_handle: Arc<Device> = device.into();
        let queue_handle: Arc<wgpu::Queue> = queue.into();
        let mut pipeline_manager = PipelineManager::new(device_handle.clone());

        for (name, source) in [
            ("colored", include_str!("colored.wgsl")),
            ("textured", include_str!("textured.wgsl")),
        ] {
            if let Err(e) = pipeline_manager.load_shader(name, source) {
                log::error!("{}", e);
            }
        }

        Ok(RenderEngine {
            surface,
            device: device_handle,
            queue: queue_handle,
            config,
            depth_texture,
            format,
            clear_color,
            pipeline_manager,
            transform_layout,
            transform_group: 0,
        })
    }

    /// Builds the scene's GPU resources and the pipelines that draw it
    pub fn load_scene(&mut self, kind: &SceneKind) -> Scene {
        let scene = Scene::new(&self.device, &self.queue, kind, &self.transform_layout);
        let (layouts, transform_group) = scene.pipeline_layouts(&self.transform_layout);
        self.transform_group = transform_group;

        let base = match kind {
            SceneKind::DualCube { .. } => PipelineConfig::new("colored", ColoredVertex::desc()),
            SceneKind::TexturedModel { .. } => {
                PipelineConfig::new("textured", TexturedVertex::desc())
            }
        }
        .with_bind_group_layouts(layouts)
        .with_color_format(self.format)
        .with_depth_format(self.depth_texture.texture.format())
        .with_cull_mode(None);

        if matches!(kind, SceneKind::DualCube { .. }) {
            // Points sit exactly on the triangle corners.
            self.pipeline_manager.register_pipeline(
                POINT_PIPELINE,
                base.clone()
                    .with_label("Corner Points")
                    .with_primitive_topology(wgpu::PrimitiveTopology::PointList)
                    .with_depth_compare(wgpu::CompareFunction::LessEqual),
            );
        }
        self.pipeline_manager
            .register_pipeline(TRIANGLE_PIPELINE, base.with_label("Triangles"));

        if let Err(errors) = self.pipeline_manager.create_all_pipelines() {
            for e in errors {
                log::error!("{}", e);
            }
        }
        log::debug!("Pipelines: {:?}", self.pipeline_manager.list_pipelines());

        scene
    }

    /// Draws one frame
    ///
    /// Lost or outdated surfaces are reconfigured and the frame is skipped.
    /// Only running out of memory is reported to the caller.
    pub fn render_frame(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(wgpu::SurfaceError::OutOfMemory),
            Err(e) => {
                log::warn!("Skipping frame: {}", e);
                return Ok(());
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some(textured) = &scene.textured {
                render_pass.set_bind_group(0, textured.globals.bind_group(), &[]);
                render_pass.set_bind_group(2, &textured.texture_bind_group, &[]);
            }

            let triangles = self.pipeline_manager.pipeline(TRIANGLE_PIPELINE);
            let points = self.pipeline_manager.pipeline(POINT_PIPELINE);

            if let Some(triangles) = triangles {
                for instance in &scene.object.instances {
                    render_pass.set_pipeline(triangles);
                    render_pass.draw_instance(&scene.object.mesh, instance, self.transform_group);

                    if let Some(points) = points {
                        render_pass.set_pipeline(points);
                        render_pass.draw_mesh(&scene.object.mesh);
                    }
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture = DepthTexture::create(&self.device, &self.config, "depth_texture");
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
