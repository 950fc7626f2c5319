use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub suggestions: SuggestionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Base URLs and client settings for the third-party APIs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub gbif_base_url: String,
    pub countries_base_url: String,
    pub wikipedia_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// Occurrence paging limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Records requested per page
    pub page_size: u32,
    /// Hard cap on records fetched for one search
    pub max_records: u32,
}

/// Species autocomplete behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    pub debounce_ms: u64,
    pub limit: u32,
    pub min_query_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Directory holding the browser frontend
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            gbif_base_url: "https://api.gbif.org/v1".to_string(),
            countries_base_url: "https://restcountries.com/v3.1".to_string(),
            wikipedia_base_url: "https://en.wikipedia.org/api/rest_v1".to_string(),
            timeout_secs: 30,
            user_agent: concat!("occurrence-explorer/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 300,
            max_records: 1200,
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            limit: 10,
            min_query_len: 2,
        }
    }
}

impl SuggestionConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            static_dir: "public".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.search.page_size, 300);
        assert_eq!(config.search.max_records, 1200);
        assert_eq!(config.suggestions.debounce(), Duration::from_millis(300));
        assert_eq!(config.upstream.gbif_base_url, "https://api.gbif.org/v1");
        assert!(config.observability.metrics.enabled);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [search]
            page_size = 100

            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        assert_eq!(config.search.page_size, 100);
        assert_eq!(config.search.max_records, 1200);
        assert_eq!(config.logging.level, "debug");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_upstream_override() {
        let config = from_toml(
            r#"
            [upstream]
            gbif_base_url = "http://localhost:9000"
            timeout_secs = 5
            "#,
        );

        assert_eq!(config.upstream.gbif_base_url, "http://localhost:9000");
        assert_eq!(config.upstream.timeout(), Duration::from_secs(5));
        assert_eq!(
            config.upstream.wikipedia_base_url,
            "https://en.wikipedia.org/api/rest_v1"
        );
    }
}
