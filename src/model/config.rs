use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from .todo.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#4488FF"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_ms: default_tick_ms(),
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_tick_ms() -> u64 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "todo.log".to_string()
}
