use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Apps Script deployment serving the EDC sheet
pub const DEFAULT_BASE_URL: &str = "https://script.google.com/macros/s/AKfycbxDSazECZDythUcrOCShfBhgOd6Wm36J3be082OIwvOXOGIQVa0CmPWiiK4Y3mSwq_P/exec";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub search: SearchConfig,
    pub window: WindowConfig,
    pub labels: LabelsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// The query is appended directly to this URL
    pub base_url: String,
    /// Percent-encode the query before appending it
    pub encode_query: bool,
    /// Request timeout. None = wait for the endpoint indefinitely
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a lookup is issued
    pub debounce_ms: u64,
    /// Drop responses that are not for the most recently issued lookup
    pub discard_stale_responses: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// User-facing strings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub title: String,
    pub heading: String,
    pub placeholder: String,
    pub button: String,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            encode_query: true,
            timeout_secs: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1,
            discard_stale_responses: false,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 560.0,
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            title: "EDC Lookup".to_string(),
            heading: "Look up record by EDC serial number".to_string(),
            placeholder: "e.g. 746".to_string(),
            button: "Search".to_string(),
        }
    }
}

pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine home directory, using default config");
            Config::default()
        }
    }
}

pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ on every platform, not the macOS Application Support dir
    dirs::home_dir().map(|home| home.join(".config").join("edc-lookup").join("config.toml"))
}
