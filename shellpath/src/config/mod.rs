//! Configuration system for shellpath.
//!
//! Configuration selects the host family used for path conversion and the
//! default log level.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SHELLPATH_HOST_FAMILY`, `SHELLPATH_LOG_MODE`)
//! 3. An explicit file (`ConfigBuilder::with_config_file`)
//! 4. User config (`~/.shellpath/config.yaml`)
//! 5. Built-in defaults (native family, normal logging)
//!
//! # Examples
//!
//! ```no_run
//! use shellpath::config::ConfigBuilder;
//! use shellpath::fs::Filesystem;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let fs = Filesystem::new(config.path_env());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, HOST_FAMILY_ENV};
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, HostFamilySetting};
