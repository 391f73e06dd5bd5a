//! Application Configuration
//!
//! Build-time settings for the marketplace client.

use std::sync::OnceLock;

use log::LevelFilter;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Client-wide settings, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for REST calls ("" = same origin)
    pub api_base: String,
    /// Where a 401 or logout sends the browser
    pub login_path: String,
    /// Storefront auth-state poll cadence
    pub auth_poll_interval_ms: u32,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Simulated latency of the mock services
    pub mock_latency_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_path: "/admin/login".to_string(),
            auth_poll_interval_ms: 1000,
            toast_duration_ms: 3000,
            mock_latency_ms: 300,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `MARKETPLACE_API_BASE` / `MARKETPLACE_LOG` at build time
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("MARKETPLACE_API_BASE"), option_env!("MARKETPLACE_LOG"))
    }

    fn with_overrides(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level {
            config.log_level = parse_log_level(level);
        }
        config
    }

    /// Join the API base with an absolute endpoint path
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint)
    }
}

/// Global config accessor
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_build_env)
}

/// Parse a level name, falling back to `Info`
pub fn parse_log_level(s: &str) -> LevelFilter {
    match s.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.login_path, "/admin/login");
        assert_eq!(config.auth_poll_interval_ms, 1000);
        assert_eq!(config.api_url("/api/categories"), "/api/categories");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::with_overrides(Some("https://shop.example.com/"), Some("debug"));
        assert_eq!(config.api_url("/api/categories"), "https://shop.example.com/api/categories");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_parse_log_level_fallback() {
        assert_eq!(parse_log_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_log_level("verbose"), LevelFilter::Info);
    }
}
