//! GLFW-based window for Vulkan
//!
//! Creates a single window with no client API attached (Vulkan brings its
//! own surface later) and exposes the instance extensions GLFW needs.

use crate::core::config::WindowConfig;
use crate::window::WindowBackend;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `glfwInit` failed
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// `glfwCreateWindow` returned no window
    #[error("Window creation failed")]
    CreationFailed,

    /// GLFW found no Vulkan loader or no surface extensions
    #[error("GLFW reports Vulkan is not supported on this system")]
    VulkanUnsupported,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper
///
/// Field order is drop order: the native window goes first, then the
/// library handle. GLFW terminates once its last handle is dropped.
pub struct Window {
    window: glfw::PWindow,
    glfw: glfw::Glfw,
}

impl Window {
    /// Initialize GLFW and open the window described by `config`
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;

        // Configure for Vulkan (no OpenGL context)
        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        let (window, _events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        log::info!(
            "Created {}x{} window \"{}\" (resizable: {})",
            config.width,
            config.height,
            config.title,
            config.resizable
        );

        Ok(Self { window, glfw })
    }
}

impl WindowBackend for Window {
    fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        if !self.glfw.vulkan_supported() {
            return Err(WindowError::VulkanUnsupported);
        }
        self.glfw
            .get_required_instance_extensions()
            .ok_or(WindowError::VulkanUnsupported)
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        log::info!("Destroying window");
    }
}
