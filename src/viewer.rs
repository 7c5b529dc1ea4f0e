use crate::camera::CameraController;
use crate::core::{ContextState, RenderContext};
use crate::error::Result;
use crate::shader_source::ShaderSources;
use crate::traits::GraphicsBackend;
use crate::types::FrameUniforms;

/// Viewer combines the camera controller and the render context
pub struct Viewer<B: GraphicsBackend> {
    controller: CameraController,
    context: RenderContext<B>,
}

impl<B: GraphicsBackend> Viewer<B> {
    /// Build the program, upload the quad and size the viewport
    pub fn new(
        backend: B,
        sources: &ShaderSources,
        controller: CameraController,
        size: (u32, u32),
    ) -> Result<Self> {
        let mut context = RenderContext::new(backend);
        context.initialize(&sources.vertex, &sources.fragment)?;
        context.upload_geometry()?;
        context.resize(size.0, size.1);

        Ok(Self {
            controller,
            context,
        })
    }

    /// One loop iteration: integrate input, then draw
    pub fn frame(&mut self) -> Result<FrameUniforms> {
        self.controller.tick();
        self.context.render_frame(self.controller.pose())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    pub fn state(&self) -> ContextState {
        self.context.state()
    }

    pub fn controller(&self) -> &CameraController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CameraController {
        &mut self.controller
    }

    pub fn context(&self) -> &RenderContext<B> {
        &self.context
    }
}
