use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::core::input::{Direction, InputState, KeyBindings};

/// World units per tick for each held direction
pub const PAN_SPEED: f32 = 0.09;
/// Degrees of pitch/yaw per pixel of mouse drag
pub const ROTATION_SPEED: f32 = 0.1;
pub const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, -5.0);

/// Camera placement. Pitch and yaw are accumulated in degrees and never
/// clamped or wrapped; orientation is always rebuilt from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
    pub pitch: f32,
    pub yaw: f32,
    /// World-space direction of the most recent translation step
    pub direction: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            pitch: 0.0,
            yaw: 0.0,
            direction: Vec3::ZERO,
        }
    }

    /// Pitch about X first, then yaw about Y, no roll
    pub fn orientation_from_euler(pitch: f32, yaw: f32) -> Quat {
        Quat::from_rotation_y(yaw.to_radians()) * Quat::from_rotation_x(pitch.to_radians())
    }

    /// Move along a camera-space vector
    pub fn translate(&mut self, local: Vec3, speed: f32) {
        self.direction = self.orientation * local;
        self.position += self.direction * speed;
    }

    pub fn rotate(&mut self, pitch_delta: f32, yaw_delta: f32) {
        self.pitch += pitch_delta;
        self.yaw += yaw_delta;
        self.orientation = Self::orientation_from_euler(self.pitch, self.yaw);
    }

    /// Camera-to-world transform: rotation then translation, no scale
    pub fn transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(START_POSITION)
    }
}

/// Tunables for [`CameraController`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub pan_speed: f32,
    pub rotation_speed: f32,
    pub start_position: [f32; 3],
    pub bindings: KeyBindings,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            pan_speed: PAN_SPEED,
            rotation_speed: ROTATION_SPEED,
            start_position: START_POSITION.to_array(),
            bindings: KeyBindings::default(),
        }
    }
}

/// Free-fly camera driven by held keys and mouse drags
#[derive(Debug, Clone)]
pub struct CameraController {
    pose: CameraPose,
    input: InputState,
    settings: CameraSettings,
}

impl CameraController {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            pose: CameraPose::new(Vec3::from_array(settings.start_position)),
            input: InputState::new(),
            settings,
        }
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    pub fn on_key_change(&mut self, code: KeyCode, pressed: bool) {
        self.input.set_key(code, pressed);
    }

    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        self.input.move_mouse(x, y);
    }

    pub fn on_mouse_button(&mut self, pressed: bool) {
        self.input.set_mouse_down(pressed);
    }

    /// Integrate held keys, then any pending drag, into the pose.
    ///
    /// Translation uses the orientation from before this tick's rotation.
    /// The mouse delta is only consumed while the button is down.
    pub fn tick(&mut self) {
        for direction in Direction::ALL {
            if self.input.any_held(self.settings.bindings.keys(direction)) {
                self.pose
                    .translate(Vec3::from_array(direction.local_vector()), self.settings.pan_speed);
            }
        }

        if self.input.mouse().down {
            let (dx, dy) = self.input.take_mouse_delta();
            let speed = self.settings.rotation_speed;
            self.pose.rotate(dy * speed, dx * speed);
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn starts_behind_origin_looking_down_z() {
        let controller = CameraController::default();
        assert_eq!(controller.pose().position, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(controller.pose().orientation, Quat::IDENTITY);
    }

    #[test]
    fn forward_moves_along_z() {
        let mut controller = CameraController::default();
        controller.on_key_change(KeyCode::KeyW, true);
        controller.tick();
        assert!(approx_eq(controller.pose().position, Vec3::new(0.0, 0.0, -4.91)));
        assert!(approx_eq(controller.pose().direction, Vec3::Z));
    }

    #[test]
    fn aliases_for_one_direction_move_once() {
        let mut controller = CameraController::default();
        controller.on_key_change(KeyCode::KeyW, true);
        controller.on_key_change(KeyCode::ArrowUp, true);
        controller.tick();
        assert!(approx_eq(controller.pose().position, Vec3::new(0.0, 0.0, -4.91)));
    }

    #[test]
    fn unknown_keys_do_nothing() {
        let mut controller = CameraController::default();
        controller.on_key_change(KeyCode::KeyZ, true);
        controller.tick();
        assert_eq!(controller.pose().position, START_POSITION);
    }

    #[test]
    fn yaw_quarter_turn_maps_forward_to_x() {
        let q = CameraPose::orientation_from_euler(0.0, 90.0);
        assert!(approx_eq(q * Vec3::Z, Vec3::X));
    }

    #[test]
    fn euler_matches_pitch_then_yaw_composition() {
        let (pitch, yaw) = (30.0_f32, 45.0_f32);
        let (sx, cx) = (pitch.to_radians() / 2.0).sin_cos();
        let (sy, cy) = (yaw.to_radians() / 2.0).sin_cos();
        let expected = Quat::from_xyzw(sx * cy, cx * sy, -sx * sy, cx * cy);

        let q = CameraPose::orientation_from_euler(pitch, yaw);
        assert!(q.abs_diff_eq(expected, 1e-6));
        assert!((q.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn transform_has_no_scale() {
        let mut pose = CameraPose::default();
        pose.rotate(12.0, 250.0);
        let m = pose.transform();
        for i in 0..3 {
            assert!((m.col(i).truncate().length() - 1.0).abs() < 1e-5);
        }
        assert_eq!(m.col(3).truncate(), pose.position);
    }
}
