//! # Triangle Engine
//!
//! First stage of the hello-triangle tutorial: open a fixed-size GLFW window,
//! check that the Vulkan loader supports every instance extension the window
//! needs, create the instance, and idle in the event loop until the window
//! is closed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use triangle_engine::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     triangle_engine::foundation::logging::init();
//!     triangle_engine::run(&AppConfig::default())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod backend;
pub mod core;
pub mod foundation;
pub mod window;

mod application;

pub use application::{run, AppError, AppResult, HelloTriangleApp};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        backend::vulkan::{
            check_extension_support, create_instance, missing_extensions, AshLoader, ExtensionProperties,
            ExtensionSource, InstanceDescriptor, InstanceError, InstanceLoader, VulkanInstance, Window,
            WindowError,
        },
        core::config::{AppConfig, ApplicationInfo, Config, WindowConfig},
        window::{run_event_loop, LoopState, WindowBackend},
        AppError, AppResult, HelloTriangleApp,
    };
}
