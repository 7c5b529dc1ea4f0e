use crate::camera::CameraPose;
use crate::error::{Result, ShaderStage, ViewerError};
use crate::traits::GraphicsBackend;
use crate::types::{FrameUniforms, QUAD_VERTEX_COUNT, QUAD_VERTICES};

/// Lifecycle of a [`RenderContext`]. `Failed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Uninitialized,
    Initialized,
    Rendering,
    Failed,
}

/// Full-screen shader pipeline: one program, one static quad, one uniform block
pub struct RenderContext<B: GraphicsBackend> {
    backend: B,
    program: Option<B::Program>,
    state: ContextState,
    geometry_uploaded: bool,
    window: (u32, u32),
    frame: u64,
}

impl<B: GraphicsBackend> RenderContext<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            program: None,
            state: ContextState::Uninitialized,
            geometry_uploaded: false,
            window: (0, 0),
            frame: 0,
        }
    }

    /// Compile both stages and link them. Any failure leaves the context `Failed`.
    pub fn initialize(&mut self, vertex_source: &str, fragment_source: &str) -> Result<()> {
        if self.state != ContextState::Uninitialized {
            return Err(ViewerError::NotReady("context already initialized"));
        }

        let program = self
            .build_program(vertex_source, fragment_source)
            .map_err(|e| self.fail(e))?;

        self.program = Some(program);
        self.state = ContextState::Initialized;
        log::info!("Shader program linked");
        Ok(())
    }

    fn build_program(&mut self, vertex_source: &str, fragment_source: &str) -> Result<B::Program> {
        let vertex = self.backend.compile_shader(ShaderStage::Vertex, vertex_source)?;
        let fragment = self
            .backend
            .compile_shader(ShaderStage::Fragment, fragment_source)?;
        self.backend.link_program(&vertex, &fragment)
    }

    /// Upload the full-screen quad. Geometry never changes afterwards.
    pub fn upload_geometry(&mut self) -> Result<()> {
        self.ensure_usable()?;
        self.backend
            .upload_vertices(&QUAD_VERTICES)
            .map_err(|e| self.fail(e))?;
        self.geometry_uploaded = true;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Resize to {}x{}", width, height);
        self.window = (width, height);
        self.backend.set_viewport(width, height);
    }

    /// Draw one frame with `pose` and return the uniforms that were uploaded.
    ///
    /// The frame counter only advances when the draw succeeds. A minimized
    /// (zero-sized) window skips the frame without touching the backend.
    pub fn render_frame(&mut self, pose: &CameraPose) -> Result<FrameUniforms> {
        self.ensure_usable()?;
        if !self.geometry_uploaded {
            return Err(ViewerError::NotReady("geometry not uploaded"));
        }
        let Some(program) = self.program.as_ref() else {
            return Err(ViewerError::NotReady("no shader program"));
        };

        if self.window.0 == 0 || self.window.1 == 0 {
            return Err(ViewerError::FrameSkipped(format!(
                "window is {}x{}",
                self.window.0, self.window.1
            )));
        }

        let next = self.frame + 1;
        let uniforms = FrameUniforms::new(self.window, next, pose.transform());

        match self.backend.draw(program, &uniforms, QUAD_VERTEX_COUNT) {
            Ok(()) => {
                self.frame = next;
                self.state = ContextState::Rendering;
                Ok(uniforms)
            }
            Err(e) if !e.is_fatal() => Err(e),
            Err(e) => Err(self.fail(e)),
        }
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Number of frames drawn so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn ensure_usable(&self) -> Result<()> {
        match self.state {
            ContextState::Initialized | ContextState::Rendering => Ok(()),
            ContextState::Uninitialized => Err(ViewerError::NotReady("context not initialized")),
            ContextState::Failed => Err(ViewerError::NotReady("context failed")),
        }
    }

    fn fail(&mut self, err: ViewerError) -> ViewerError {
        log::error!("Render context failed: {}", err);
        self.state = ContextState::Failed;
        self.program = None;
        err
    }
}
