use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

/// Pipeline stage a shader source belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Everything that can end a viewer session.
///
/// All variants except [`ViewerError::FrameSkipped`] are fatal: the render
/// context is unusable afterwards and the host should report and exit.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to load shader source {path:?}: {source}")]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compile {stage} shader: {diagnostic}")]
    ShaderCompile {
        stage: ShaderStage,
        diagnostic: String,
    },

    #[error("failed to link shader program: {0}")]
    ProgramLink(String),

    #[error("graphics context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("graphics context lost: {0}")]
    ContextLost(String),

    #[error("render context not ready: {0}")]
    NotReady(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The surface did not hand out a texture in time. Nothing was drawn.
    #[error("frame skipped: {0}")]
    FrameSkipped(String),
}

impl ViewerError {
    /// Whether the session can keep going after this error
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ViewerError::FrameSkipped(_))
    }
}
