use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

/// Camera translation directions driven by held keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Back,
        Direction::StrafeLeft,
        Direction::StrafeRight,
    ];

    /// Unit vector in camera space
    pub const fn local_vector(self) -> [f32; 3] {
        match self {
            Direction::Forward => [0.0, 0.0, 1.0],
            Direction::Back => [0.0, 0.0, -1.0],
            Direction::StrafeLeft => [-1.0, 0.0, 0.0],
            Direction::StrafeRight => [1.0, 0.0, 0.0],
        }
    }
}

/// Keys bound to each movement direction. Any bound key being held activates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<KeyCode>,
    pub back: Vec<KeyCode>,
    pub strafe_left: Vec<KeyCode>,
    pub strafe_right: Vec<KeyCode>,
}

impl KeyBindings {
    pub fn keys(&self, direction: Direction) -> &[KeyCode] {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Back => &self.back,
            Direction::StrafeLeft => &self.strafe_left,
            Direction::StrafeRight => &self.strafe_right,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            back: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            strafe_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            strafe_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
        }
    }
}

/// Pointer state between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseState {
    /// Last recorded cursor position, `None` until the first move
    pub last: Option<(f32, f32)>,
    /// Offset from the current position back to the previous one
    pub delta: (f32, f32),
    pub down: bool,
}

/// Raw keyboard and mouse state, written by event handlers and read once per tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<KeyCode, bool>,
    mouse: MouseState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, code: KeyCode, pressed: bool) {
        self.keys.insert(code, pressed);
    }

    /// Keys that were never seen count as released
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.keys.get(&code).copied().unwrap_or(false)
    }

    pub fn any_held(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|code| self.is_held(*code))
    }

    /// Record a cursor position. The delta is overwritten, not accumulated.
    pub fn move_mouse(&mut self, x: f32, y: f32) {
        self.mouse.delta = match self.mouse.last {
            Some((last_x, last_y)) => (last_x - x, last_y - y),
            None => (0.0, 0.0),
        };
        self.mouse.last = Some((x, y));
    }

    pub fn set_mouse_down(&mut self, down: bool) {
        self.mouse.down = down;
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    /// Read the pending mouse delta and zero it in one step
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_is_not_held() {
        let input = InputState::new();
        assert!(!input.is_held(KeyCode::KeyW));
        assert!(!input.is_held(KeyCode::F13));
    }

    #[test]
    fn test_key_press_and_release() {
        let mut input = InputState::new();
        input.set_key(KeyCode::KeyW, true);
        assert!(input.is_held(KeyCode::KeyW));

        input.set_key(KeyCode::KeyW, false);
        assert!(!input.is_held(KeyCode::KeyW));
    }

    #[test]
    fn test_first_move_has_no_delta() {
        let mut input = InputState::new();
        input.move_mouse(100.0, 50.0);
        assert_eq!(input.mouse().delta, (0.0, 0.0));
        assert_eq!(input.mouse().last, Some((100.0, 50.0)));
    }

    #[test]
    fn test_delta_points_back_to_previous_position() {
        let mut input = InputState::new();
        input.move_mouse(100.0, 50.0);
        input.move_mouse(90.0, 55.0);
        assert_eq!(input.mouse().delta, (10.0, -5.0));
    }

    #[test]
    fn test_delta_last_write_wins() {
        let mut input = InputState::new();
        input.move_mouse(0.0, 0.0);
        input.move_mouse(-10.0, 0.0);
        input.move_mouse(-12.0, 0.0);
        assert_eq!(input.mouse().delta, (2.0, 0.0));
    }

    #[test]
    fn test_take_mouse_delta_resets() {
        let mut input = InputState::new();
        input.move_mouse(0.0, 0.0);
        input.move_mouse(-3.0, 4.0);

        assert_eq!(input.take_mouse_delta(), (3.0, -4.0));
        assert_eq!(input.take_mouse_delta(), (0.0, 0.0));
        assert_eq!(input.mouse().last, Some((-3.0, 4.0)));
    }

    #[test]
    fn test_default_bindings_include_arrows() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.keys(Direction::Forward), &[KeyCode::KeyW, KeyCode::ArrowUp]);
        assert_eq!(bindings.keys(Direction::StrafeRight), &[KeyCode::KeyD, KeyCode::ArrowRight]);
    }

    #[test]
    fn test_any_held() {
        let mut input = InputState::new();
        input.set_key(KeyCode::ArrowUp, true);
        assert!(input.any_held(&KeyBindings::default().forward));
        assert!(!input.any_held(&KeyBindings::default().back));
    }
}
