//! Configuration type definitions for garage.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! timeout_secs = 10
//!
//! [ui]
//! notification_secs = 3
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::defaults::{DEFAULT_BASE_URL, DEFAULT_NOTIFICATION_SECS};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.garage/config.toml`
/// 2. Project config: `./.garage/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GarageConfig {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Presentation settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the car REST backend.
    /// Default: `http://localhost:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds. Unset means transport defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            timeout_secs: None,
        }
    }

    /// Effective base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notification stays visible, in seconds.
    /// Default: 3 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_secs: Option<u64>,
}

impl UiConfig {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.notification_secs.unwrap_or(DEFAULT_NOTIFICATION_SECS))
    }
}
