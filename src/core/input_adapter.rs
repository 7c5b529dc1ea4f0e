use winit::event::WindowEvent;
use winit::keyboard::PhysicalKey;

use crate::camera::CameraController;

/// Forward a winit event to the camera controller.
///
/// Returns `true` if the event was an input event the controller consumed.
/// Unidentified keys are dropped; any mouse button starts a drag. Cursor
/// positions are converted to logical pixels with `scale_factor`, so drag
/// speed does not depend on the display's DPI.
pub fn forward_input(
    controller: &mut CameraController,
    event: &WindowEvent,
    scale_factor: f64,
) -> bool {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            if let PhysicalKey::Code(code) = event.physical_key {
                controller.on_key_change(code, event.state.is_pressed());
            }
            true
        }
        WindowEvent::CursorMoved { position, .. } => {
            let logical = position.to_logical::<f32>(scale_factor);
            controller.on_mouse_move(logical.x, logical.y);
            true
        }
        WindowEvent::MouseInput { state, .. } => {
            controller.on_mouse_button(state.is_pressed());
            true
        }
        _ => false,
    }
}
