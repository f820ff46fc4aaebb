//! # Configuration System
//!
//! Hierarchical TOML configuration for garage.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.garage/config.toml`
//! 3. **Project config** - `./.garage/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use garage_core::config::GarageConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GarageConfig::load_hierarchy()?;
//!     println!("backend: {}", config.api.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ApiConfig, GarageConfig, UiConfig};
pub use validation::validate_config;

impl GarageConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
