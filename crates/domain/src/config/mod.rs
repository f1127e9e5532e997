//! Application configuration for Umbra
//!
//! Configuration structures organized by concern:
//! - `root`: main configuration and CLI overrides
//! - `storage`: settings file location
//! - `logging`: logging settings
//! - `presentation`: document marker names
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod presentation;
pub mod root;
pub mod storage;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use presentation::PresentationConfig;
pub use root::{CliOverrides, Config};
pub use storage::StorageConfig;
