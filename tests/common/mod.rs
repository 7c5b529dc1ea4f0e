#![allow(dead_code)]

use raymarch_viewer::error::{Result, ShaderStage, ViewerError};
use raymarch_viewer::traits::GraphicsBackend;
use raymarch_viewer::types::FrameUniforms;

pub const VERTEX_SOURCE: &str = include_str!("../../shaders/vertex.wgsl");
pub const FRAGMENT_SOURCE: &str = include_str!("../../shaders/fragment.wgsl");

/// Fails the next draw with the given error, once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawFault {
    Timeout,
    Lost,
}

/// Backend that records every call instead of touching a GPU.
///
/// A stage "compiles" when its braces balance and it defines its entry point.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub compiled: Vec<ShaderStage>,
    pub linked: usize,
    pub fail_link: bool,
    pub vertices: Vec<[f32; 2]>,
    pub viewport: Option<(u32, u32)>,
    pub uploads: Vec<FrameUniforms>,
    pub vertex_counts: Vec<u32>,
    pub next_fault: Option<DrawFault>,
}

pub struct MockShader {
    pub stage: ShaderStage,
}

pub struct MockProgram;

impl GraphicsBackend for RecordingBackend {
    type Shader = MockShader;
    type Program = MockProgram;

    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<MockShader> {
        let entry = match stage {
            ShaderStage::Vertex => "fn vs_main",
            ShaderStage::Fragment => "fn fs_main",
        };
        let balanced = source.matches('{').count() == source.matches('}').count();
        if !balanced || !source.contains(entry) {
            return Err(ViewerError::ShaderCompile {
                stage,
                diagnostic: format!("missing `{}` or unbalanced braces", entry),
            });
        }
        self.compiled.push(stage);
        Ok(MockShader { stage })
    }

    fn link_program(&mut self, vertex: &MockShader, fragment: &MockShader) -> Result<MockProgram> {
        assert_eq!(vertex.stage, ShaderStage::Vertex);
        assert_eq!(fragment.stage, ShaderStage::Fragment);
        if self.fail_link {
            return Err(ViewerError::ProgramLink("interface mismatch".into()));
        }
        self.linked += 1;
        Ok(MockProgram)
    }

    fn upload_vertices(&mut self, vertices: &[[f32; 2]]) -> Result<()> {
        self.vertices = vertices.to_vec();
        Ok(())
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Some((width, height));
    }

    fn draw(
        &mut self,
        _program: &MockProgram,
        uniforms: &FrameUniforms,
        vertex_count: u32,
    ) -> Result<()> {
        match self.next_fault.take() {
            Some(DrawFault::Timeout) => Err(ViewerError::FrameSkipped("timeout".into())),
            Some(DrawFault::Lost) => Err(ViewerError::ContextLost("device lost".into())),
            None => {
                self.uploads.push(*uniforms);
                self.vertex_counts.push(vertex_count);
                Ok(())
            }
        }
    }
}
