//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging and tracing configuration.
///
/// Subscriber installation happens in the host process; this crate only
/// defines the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Path to the application log file.
    #[serde(default = "default_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            file: default_file(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

fn default_file() -> String {
    "data/logs/app.log".to_string()
}
