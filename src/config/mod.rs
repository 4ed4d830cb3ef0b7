//! Configuration management for fusion-listeners
//!
//! Layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//! - Per-environment configuration (development, test, staging, production)
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base default configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local overrides (not committed to version control)
//! 4. `FUSION_*` environment variables
//!
//! ```toml
//! [logger]
//! level = "info"
//!
//! [listeners]
//! initial_capacity = 10
//! prune_matchers_on_unregister = false
//! ```

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ListenersConfig, LoggerSettings, Settings};
