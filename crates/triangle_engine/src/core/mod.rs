//! Core configuration

pub mod config;

pub use config::{AppConfig, ApplicationInfo, Config, ConfigError, ConfigFormat, WindowConfig};
