use crate::error::{Result, ShaderStage};
use crate::types::FrameUniforms;

/// Graphics device abstraction used by [`crate::core::RenderContext`].
///
/// Implementations own the device-side objects; the render context owns
/// the ordering and state machine around them.
pub trait GraphicsBackend {
    /// A compiled shader stage
    type Shader;
    /// A linked vertex + fragment program
    type Program;

    /// Compile one stage, reporting diagnostics as `ShaderCompile`
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<Self::Shader>;

    /// Link both stages against the uniform block and the quad vertex layout
    fn link_program(&mut self, vertex: &Self::Shader, fragment: &Self::Shader)
        -> Result<Self::Program>;

    /// Upload static vertex data with a single `vec2<f32>` attribute
    fn upload_vertices(&mut self, vertices: &[[f32; 2]]) -> Result<()>;

    /// Resize the drawable surface and viewport
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Upload uniforms, draw `vertex_count` vertices as triangles, and present
    fn draw(
        &mut self,
        program: &Self::Program,
        uniforms: &FrameUniforms,
        vertex_count: u32,
    ) -> Result<()>;
}
