use dioxus::logger::tracing::Level;

#[cfg(not(target_arch = "wasm32"))]
const API_BASE_ENV: &str = "SPOTIFY_MANAGER_API_BASE";
#[cfg(not(target_arch = "wasm32"))]
const LOG_LEVEL_ENV: &str = "SPOTIFY_MANAGER_LOG";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefix for every API path. Empty in the browser, where requests are
    /// same-origin and relative.
    pub api_base: String,
    pub log_level: Level,
}

impl ClientConfig {
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self {
            api_base: String::new(),
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::from_values(
            std::env::var(API_BASE_ENV).ok().as_deref(),
            std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_NATIVE_API_BASE)
            .trim_end_matches('/')
            .to_string();
        Self {
            api_base,
            log_level: log_level.and_then(parse_level).unwrap_or(Level::INFO),
        }
    }
}

pub fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}
