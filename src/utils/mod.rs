//! Configuration and logging

pub mod config;
pub mod log;

pub use config::{ConfigError, ConfigResult, ConfigurationManager, OverlayConfig};
pub use self::log::init_logging;
