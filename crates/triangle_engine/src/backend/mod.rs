//! Graphics backend implementations

pub mod vulkan;
