pub mod gpu_context;
pub mod input;
pub mod input_adapter;
pub mod render_context;

pub use gpu_context::GpuContext;
pub use input::{Direction, InputState, KeyBindings, MouseState};
pub use input_adapter::forward_input;
pub use render_context::{ContextState, RenderContext};
