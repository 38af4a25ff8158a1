//! Vulkan initialization components

pub mod context;
pub mod extensions;
pub mod window;

pub use context::*;
pub use extensions::*;
pub use window::*;
