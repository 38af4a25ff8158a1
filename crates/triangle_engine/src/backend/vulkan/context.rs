//! Vulkan instance creation
//!
//! `create_instance` verifies the window's required extensions against what
//! the loader reports and only then submits the instance descriptor. The
//! backend sits behind `InstanceLoader` so the same sequence runs against
//! `ash` in production and against fakes in tests.

use crate::backend::vulkan::extensions::{
    collect_extension_properties, is_extension_set_supported, ExtensionProperties, ExtensionSource,
};
use crate::core::config::ApplicationInfo;
use ash::{vk, Entry, Instance};
use std::ffi::CString;
use std::os::raw::c_char;
use thiserror::Error;

/// Instance creation errors
#[derive(Error, Debug)]
pub enum InstanceError {
    /// A required extension is missing from the available set
    #[error("not all required instance extensions are supported")]
    UnsupportedExtensions,

    /// The backend rejected the instance descriptor
    #[error("failed to create Vulkan instance")]
    CreationFailed {
        /// Status returned by the backend
        result: vk::Result,
    },

    /// The Vulkan loader library could not be loaded
    #[error("failed to load Vulkan: {0}")]
    LoaderUnavailable(String),
}

/// Result type for instance operations
pub type InstanceResult<T> = Result<T, InstanceError>;

/// Everything submitted to the backend to create an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    /// Application and engine metadata
    pub application: ApplicationInfo,
    /// Instance extensions to enable
    pub enabled_extensions: Vec<String>,
    /// Layers to enable. Always empty; validation layers are not used.
    pub enabled_layers: Vec<String>,
}

impl InstanceDescriptor {
    /// Descriptor with the given extensions and no layers
    pub fn new(application: ApplicationInfo, enabled_extensions: Vec<String>) -> Self {
        Self {
            application,
            enabled_extensions,
            enabled_layers: Vec::new(),
        }
    }
}

/// Backend able to enumerate extensions and create instances
pub trait InstanceLoader: ExtensionSource {
    /// Owned instance handle produced by this loader
    type Instance;

    /// Submit `descriptor` to the backend
    fn create_instance(&self, descriptor: &InstanceDescriptor) -> Result<Self::Instance, vk::Result>;
}

/// Verify required extensions, then create the instance
///
/// Fails with `UnsupportedExtensions` without touching the backend's
/// instance entry point if any name is missing, and with `CreationFailed`
/// if the backend returns an error status.
pub fn create_instance<L: InstanceLoader + ?Sized>(
    loader: &L,
    application: &ApplicationInfo,
    required_extensions: &[String],
) -> InstanceResult<L::Instance> {
    if !is_extension_set_supported(loader, required_extensions) {
        return Err(InstanceError::UnsupportedExtensions);
    }

    let descriptor = InstanceDescriptor::new(application.clone(), required_extensions.to_vec());
    log::debug!(
        "Creating instance for \"{}\" with extensions {:?}",
        descriptor.application.application_name,
        descriptor.enabled_extensions
    );

    let instance = loader.create_instance(&descriptor).map_err(|result| {
        log::error!("vkCreateInstance returned {:?}", result);
        InstanceError::CreationFailed { result }
    })?;

    log::info!("Vulkan instance created");
    Ok(instance)
}

/// Loader backed by the system Vulkan library
pub struct AshLoader {
    entry: Entry,
}

impl AshLoader {
    /// Load the Vulkan library at runtime
    pub fn new() -> InstanceResult<Self> {
        let entry = unsafe { Entry::load() }
            .map_err(|e| InstanceError::LoaderUnavailable(format!("{:?}", e)))?;
        Ok(Self { entry })
    }
}

impl ExtensionSource for AshLoader {
    fn enumerate_instance_extensions(&self) -> Result<Vec<ExtensionProperties>, vk::Result> {
        let properties = self.entry.enumerate_instance_extension_properties(None)?;
        Ok(collect_extension_properties(&properties))
    }
}

impl InstanceLoader for AshLoader {
    type Instance = VulkanInstance;

    fn create_instance(&self, descriptor: &InstanceDescriptor) -> Result<VulkanInstance, vk::Result> {
        let app = &descriptor.application;
        let app_name = CString::new(app.application_name.as_str())
            .map_err(|_| vk::Result::ERROR_INITIALIZATION_FAILED)?;
        let engine_name = CString::new(app.engine_name.as_str())
            .map_err(|_| vk::Result::ERROR_INITIALIZATION_FAILED)?;

        let (app_major, app_minor, app_patch) = app.application_version;
        let (engine_major, engine_minor, engine_patch) = app.engine_version;
        let (api_major, api_minor) = app.api_version;

        let app_info = vk::ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(vk::make_api_version(0, app_major, app_minor, app_patch))
            .engine_name(&engine_name)
            .engine_version(vk::make_api_version(0, engine_major, engine_minor, engine_patch))
            .api_version(vk::make_api_version(0, api_major, api_minor, 0));

        // A name with an interior NUL can never match an enumerated extension
        let extension_names = descriptor
            .enabled_extensions
            .iter()
            .map(|name| CString::new(name.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| vk::Result::ERROR_EXTENSION_NOT_PRESENT)?;
        let layer_names = descriptor
            .enabled_layers
            .iter()
            .map(|name| CString::new(name.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| vk::Result::ERROR_LAYER_NOT_PRESENT)?;

        let extension_ptrs: Vec<*const c_char> = extension_names.iter().map(|name| name.as_ptr()).collect();
        let layer_ptrs: Vec<*const c_char> = layer_names.iter().map(|name| name.as_ptr()).collect();

        let create_info = vk::InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_extension_names(&extension_ptrs)
            .enabled_layer_names(&layer_ptrs);

        let instance = unsafe { self.entry.create_instance(&create_info, None)? };

        Ok(VulkanInstance {
            instance,
            _entry: self.entry.clone(),
        })
    }
}

/// Vulkan instance wrapper with RAII cleanup
pub struct VulkanInstance {
    instance: Instance,
    // Keeps the loader library mapped until after destroy_instance
    _entry: Entry,
}

impl VulkanInstance {
    /// Raw instance handle
    pub fn handle(&self) -> vk::Instance {
        self.instance.handle()
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        log::info!("Destroying Vulkan instance");
        unsafe {
            self.instance.destroy_instance(None);
        }
    }
}
