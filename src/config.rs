use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::CameraSettings;
use crate::cli::Cli;
use crate::error::{Result, ViewerError};
use crate::shader_source::ShaderPaths;

pub const INITIAL_WINDOW_WIDTH: u32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: u32 = 720;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Raymarch Viewer".to_string(),
            width: INITIAL_WINDOW_WIDTH,
            height: INITIAL_WINDOW_HEIGHT,
            vsync: true,
        }
    }
}

/// Viewer configuration. Every field is optional in the JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub camera: CameraSettings,
    pub window: WindowSettings,
    pub shaders: ShaderPaths,
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ViewerError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ViewerError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    /// Config file (if any) with command-line flags layered on top
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(vertex) = &cli.vertex {
            self.shaders.vertex = vertex.clone();
        }
        if let Some(fragment) = &cli.fragment {
            self.shaders.fragment = fragment.clone();
        }
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if cli.no_vsync {
            self.window.vsync = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use winit::keyboard::KeyCode;

    #[test]
    fn empty_json_is_default() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.camera.pan_speed, 0.09);
        assert_eq!(config.camera.rotation_speed, 0.1);
        assert_eq!(config.camera.start_position, [0.0, 0.0, -5.0]);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = ViewerConfig::from_json(
            r#"{ "camera": { "pan_speed": 0.5, "bindings": { "forward": ["KeyI"] } } }"#,
        )
        .unwrap();

        assert_eq!(config.camera.pan_speed, 0.5);
        assert_eq!(config.camera.rotation_speed, 0.1);
        assert_eq!(config.camera.bindings.forward, vec![KeyCode::KeyI]);
        assert_eq!(
            config.camera.bindings.back,
            vec![KeyCode::KeyS, KeyCode::ArrowDown]
        );
        assert!(config.window.vsync);
    }

    #[test]
    fn example_config_spells_out_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("viewer.example.json");
        assert_eq!(ViewerConfig::load(&path).unwrap(), ViewerConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = ViewerConfig::from_json("{ camera: ").unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let err = ViewerConfig::load(Path::new("no/such/viewer.json")).unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from([
            "raymarch-viewer",
            "--fragment",
            "custom.wgsl",
            "--width",
            "800",
            "--height",
            "600",
            "--no-vsync",
        ]);
        let config = ViewerConfig::resolve(&cli).unwrap();

        assert_eq!(config.shaders.fragment, PathBuf::from("custom.wgsl"));
        assert_eq!(config.shaders.vertex, PathBuf::from("shaders/vertex.wgsl"));
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert!(!config.window.vsync);
    }
}
