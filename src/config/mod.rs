//! Configuration: service endpoint, timeouts, and the persisted theme
//! preference.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AppearanceConfig, Config, ServiceConfig};
