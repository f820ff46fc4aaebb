//! Default values for configuration.

/// Backend location used when no config file sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Seconds a notification stays visible before it is auto-dismissed.
pub const DEFAULT_NOTIFICATION_SECS: u64 = 3;

/// Directory name holding config files, under `$HOME` and the working directory.
pub const CONFIG_DIR_NAME: &str = ".garage";

pub const CONFIG_FILE_NAME: &str = "config.toml";
