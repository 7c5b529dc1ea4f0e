use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Locations of the two WGSL stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("shaders/vertex.wgsl"),
            fragment: PathBuf::from("shaders/fragment.wgsl"),
        }
    }
}

/// Vertex and fragment source text, loaded before any GPU work starts
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn load(paths: &ShaderPaths) -> Result<Self> {
        Ok(Self {
            vertex: load_shader(&paths.vertex)?,
            fragment: load_shader(&paths.fragment)?,
        })
    }
}

pub fn load_shader(path: &Path) -> Result<String> {
    log::info!("Loading shader {}", path.display());
    std::fs::read_to_string(path).map_err(|source| ViewerError::ResourceLoad {
        path: path.to_path_buf(),
        source,
    })
}
