use glam::Mat4;

/// Two triangles covering clip space, one `vec2<f32>` position per vertex
pub const QUAD_VERTICES: [[f32; 2]; 6] = [
    [-1.0, 1.0],
    [-1.0, -1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [1.0, 1.0],
    [1.0, -1.0],
];

pub const QUAD_VERTEX_COUNT: u32 = QUAD_VERTICES.len() as u32;

/// Per-frame uniform block for GPU
///
/// Matches the WGSL declaration
/// `struct Uniforms { camera: mat4x4<f32>, window: vec2<f32>, frame: f32 }`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub camera: [[f32; 4]; 4], // Column-major rotation + translation
    pub window: [f32; 2],      // Pixels
    pub frame: f32,
    pub _pad: f32,
}

impl FrameUniforms {
    pub fn new(window: (u32, u32), frame: u64, camera: Mat4) -> Self {
        Self {
            camera: camera.to_cols_array_2d(),
            window: [window.0 as f32, window.1 as f32],
            frame: frame as f32,
            _pad: 0.0,
        }
    }

    pub fn camera_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.camera)
    }
}
