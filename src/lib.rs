pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod shader_source;
pub mod traits;
pub mod types;
pub mod viewer;

pub use camera::{CameraController, CameraPose, CameraSettings};
pub use error::{Result, ShaderStage, ViewerError};
pub use viewer::Viewer;
