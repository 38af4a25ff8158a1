//! Application lifecycle
//!
//! `HelloTriangleApp` owns the window and the instance. Construction opens
//! nothing by itself: it takes an already created window, asks it for the
//! instance extensions it needs and creates the instance. `run` drives the
//! event loop and consumes the app, so teardown happens exactly once when it
//! is dropped.

use crate::backend::vulkan::context::{create_instance, AshLoader, InstanceError, InstanceLoader};
use crate::backend::vulkan::window::{Window, WindowError};
use crate::core::config::{AppConfig, ApplicationInfo, ConfigError};
use crate::window::{run_event_loop, WindowBackend};
use thiserror::Error;

/// Application-level errors
///
/// Messages are forwarded unchanged from the failing subsystem.
#[derive(Error, Debug)]
pub enum AppError {
    /// Window could not be opened or queried
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Instance could not be created
    #[error(transparent)]
    Instance(#[from] InstanceError),

    /// Configuration rejected before anything was created
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Window plus instance, torn down in reverse order of creation
///
/// Fields drop in declaration order, so the instance is destroyed before
/// the window.
pub struct HelloTriangleApp<W, I> {
    instance: I,
    window: W,
}

impl<W: WindowBackend, I> HelloTriangleApp<W, I> {
    /// Create the instance for `window`
    ///
    /// On failure the window is dropped before the error is returned.
    pub fn new<L>(window: W, loader: &L, application: &ApplicationInfo) -> AppResult<Self>
    where
        L: InstanceLoader<Instance = I> + ?Sized,
    {
        let required = window.required_instance_extensions()?;
        log::info!("Window requires instance extensions: {:?}", required);

        let instance = create_instance(loader, application, &required)?;

        Ok(Self { instance, window })
    }

    /// Run the event loop until the window closes, then tear down
    ///
    /// Returns the number of event polls performed.
    pub fn run(mut self) -> u64 {
        run_event_loop(&mut self.window)
    }

    /// The owned window
    pub fn window(&self) -> &W {
        &self.window
    }

    /// The owned instance
    pub fn instance(&self) -> &I {
        &self.instance
    }
}

impl<W, I> Drop for HelloTriangleApp<W, I> {
    fn drop(&mut self) {
        log::info!("Tearing down application");
    }
}

/// Open the window, create the instance and run until the window closes
pub fn run(config: &AppConfig) -> AppResult<()> {
    config.validate()?;

    let window = Window::new(&config.window)?;
    let loader = AshLoader::new()?;
    let app = HelloTriangleApp::new(window, &loader, &config.application)?;
    log::debug!("Instance handle {:?}", app.instance().handle());

    app.run();
    log::info!("Shutdown complete");
    Ok(())
}
