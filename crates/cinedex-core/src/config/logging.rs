//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Tracing subscriber settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `"info"` or `"cinedex_api=debug,info"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// `"json"` for machine-readable lines; anything else prints pretty.
    #[serde(default = "default_format")]
    pub format: String,
    /// Include the module path of each event.
    #[serde(default = "default_show_target")]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            show_target: default_show_target(),
        }
    }
}

impl LoggingConfig {
    /// Returns `true` when JSON output is selected.
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

fn default_show_target() -> bool {
    true
}
