//! Window backend trait

use crate::backend::vulkan::window::WindowResult;

/// Window operations used by the bootstrap sequence
///
/// # Thread Safety
/// No `Send` bound. GLFW windows must stay on the main thread.
pub trait WindowBackend {
    /// Instance extensions the windowing layer needs to present to this window
    fn required_instance_extensions(&self) -> WindowResult<Vec<String>>;

    /// Process pending window system events
    fn poll_events(&mut self);

    /// Check if the window has been asked to close
    fn should_close(&self) -> bool;
}
