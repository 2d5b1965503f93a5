use std::{sync::Arc, time::Instant};

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::ProgramConfig,
    gfx::{scene::Scene, RenderEngine},
    input::{KeyResponse, TransformController},
    transform::{compute_model_matrix, TransformState},
};

/// A window showing one scene whose transform follows the keyboard
pub struct TurntableApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ProgramConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Option<Scene>,
    transform: TransformState,
    controller: TransformController,
    start: Instant,
    init_error: Option<anyhow::Error>,
}

impl TurntableApp {
    pub fn new(config: ProgramConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let controller = TransformController::new(config.bindings.clone());

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene: None,
                transform: TransformState::new(),
                controller,
                start: Instant::now(),
                init_error: None,
            },
        })
    }

    /// Runs until the window closes or Escape is pressed
    ///
    /// Returns the error that stopped window or GPU setup, if any.
    pub fn run(mut self) -> anyhow::Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop
            .run_app(&mut self.app_state)
            .context("Event loop failed")?;

        match self.app_state.init_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = event_loop
            .create_window(
                WindowAttributes::default()
                    .with_title(self.config.title.clone())
                    .with_inner_size(LogicalSize::new(self.config.width, self.config.height)),
            )
            .context("Failed to create window")?;
        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        let clear_color = self.config.clear_color;
        let mut renderer = pollster::block_on(RenderEngine::new(
            window_handle,
            width,
            height,
            clear_color,
        ))?;

        self.scene = Some(renderer.load_scene(&self.config.scene));
        self.render_engine = Some(renderer);
        self.start = Instant::now();

        log::info!("{} ready ({}x{})", self.config.title, width, height);
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(render_engine), Some(scene)) =
            (self.render_engine.as_mut(), self.scene.as_mut())
        else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let response = self
                    .controller
                    .process_key_event(&event, &mut self.transform);
                if response == KeyResponse::ExitRequested {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                let now = self.start.elapsed().as_secs_f32();
                let model = compute_model_matrix(now, &self.transform, self.config.composition);
                scene.update(render_engine.queue(), model);

                if let Err(e) = render_engine.render_frame(scene) {
                    log::error!("Rendering stopped: {}", e);
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
