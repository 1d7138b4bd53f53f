use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable policy knobs for the dropdown.
///
/// The filterable-keyword predicate lives here rather than on the state
/// machine so hosts can swap the policy without touching transition logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownConfig {
    /// Minimum trimmed keyword length before a remote query is dispatched.
    pub min_keyword_len: usize,
    /// Quiet period between the last keystroke and the query dispatch.
    pub debounce_ms: u64,
    /// Upper bound on a single provider call.
    pub query_timeout_ms: u64,
    /// Incremental-reveal window growth per "show more" request.
    pub page_size: usize,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            min_keyword_len: 1,
            debounce_ms: 200,
            query_timeout_ms: 5_000,
            page_size: 10,
        }
    }
}

impl DropdownConfig {
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("sifter").join("config.json");
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = serde_json::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("sifter");
            std::fs::create_dir_all(&app_dir)?;
            let config_path = app_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Whether a keyword clears the bar for dispatching a remote query.
    ///
    /// Empty or whitespace-only keywords never qualify, whatever the
    /// configured minimum.
    pub fn is_keyword_filterable(&self, keyword: &str) -> bool {
        let len = keyword.trim().chars().count();
        len > 0 && len >= self.min_keyword_len
    }
}
