use serde::{Deserialize, Serialize};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const DEFAULT_LEVEL: &str = "info";

/// Verbosity of the `tracing` subscriber. `RUST_LOG`, when set, wins over it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Lowercased level name, or `None` when `level` is not one of
    /// trace/debug/info/warn/error.
    pub fn normalized_level(&self) -> Option<String> {
        let level = self.level.trim().to_ascii_lowercase();
        LEVELS.contains(&level.as_str()).then_some(level)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LEVEL.to_string()
}
