//! Background generation configuration.

use serde::{Deserialize, Serialize};

/// Settings for the repeating movie generation task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Seconds between two generation runs.
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    /// Number of runs before the task stops on its own.
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval(),
            repeat_count: default_repeat_count(),
        }
    }
}

fn default_interval() -> u64 {
    1
}

fn default_repeat_count() -> u32 {
    5
}
