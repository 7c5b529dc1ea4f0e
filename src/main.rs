use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use raymarch_viewer::cli::Cli;
use raymarch_viewer::config::ViewerConfig;
use raymarch_viewer::core::{forward_input, GpuContext};
use raymarch_viewer::shader_source::ShaderSources;
use raymarch_viewer::{CameraController, Viewer, ViewerError};

// === Application ===

struct App {
    config: ViewerConfig,
    sources: ShaderSources,
    window: Option<Arc<Window>>,
    viewer: Option<Viewer<GpuContext>>,
    error: Option<ViewerError>,
}

impl App {
    fn new(config: ViewerConfig, sources: ShaderSources) -> Self {
        Self {
            config,
            sources,
            window: None,
            viewer: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> raymarch_viewer::Result<()> {
        let settings = &self.config.window;
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(settings.title.clone())
                    .with_inner_size(winit::dpi::LogicalSize::new(settings.width, settings.height)),
            )
            .map(Arc::new)
            .map_err(|e| ViewerError::ContextUnavailable(format!("window: {}", e)))?;

        let size = window.inner_size();
        let gpu = pollster::block_on(GpuContext::new(window.clone(), settings.vsync))?;
        let controller = CameraController::new(self.config.camera.clone());
        let viewer = Viewer::new(gpu, &self.sources, controller, (size.width, size.height))?;

        log::info!("Viewer initialized at {}x{}", size.width, size.height);
        self.window = Some(window);
        self.viewer = Some(viewer);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ViewerError) {
        log::error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() && self.error.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => viewer.resize(size.width, size.height),
            WindowEvent::RedrawRequested => match viewer.frame() {
                Ok(_) => {}
                Err(e) if !e.is_fatal() => log::warn!("{}", e),
                Err(e) => self.fail(event_loop, e),
            },
            event => {
                let scale_factor = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                forward_input(viewer.controller_mut(), &event, scale_factor);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ViewerConfig::resolve(&cli).context("failed to load configuration")?;
    let sources = ShaderSources::load(&config.shaders)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, sources);

    log::info!("Controls: WASD/arrows to move, drag to look, Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err).context("viewer session ended with an error"),
        None => Ok(()),
    }
}
