use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON file with the catalog; the built-in catalog is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_premium_rating")]
    pub premium_rating: f64,
    #[serde(default = "default_top_rated_rating")]
    pub top_rated_rating: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: None,
            max_limit: default_max_limit(),
            premium_rating: default_premium_rating(),
            top_rated_rating: default_top_rated_rating(),
        }
    }
}

fn default_max_limit() -> u16 { 100 }
fn default_premium_rating() -> f64 { crate::core::DEFAULT_PREMIUM_RATING }
fn default_top_rated_rating() -> f64 { crate::core::DEFAULT_TOP_RATED_RATING }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RECYCLE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RECYCLE__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Result limit for a request, capped at `max_limit`
    pub fn effective_limit(&self, requested: Option<u16>) -> Option<usize> {
        requested
            .or(self.matching.default_limit)
            .map(|limit| limit.min(self.matching.max_limit) as usize)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RECYCLE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert!(settings.catalog.path.is_none());
        assert_eq!(settings.matching.max_limit, 100);
        assert_eq!(settings.matching.premium_rating, 4.8);
        assert_eq!(settings.matching.top_rated_rating, 4.7);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [server]
            port = 9000

            [matching]
            default_limit = 20
            premium_rating = 4.5
            top_rated_rating = 4.2
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.matching.default_limit, Some(20));
        assert_eq!(settings.matching.max_limit, 100);
        assert_eq!(settings.matching.premium_rating, 4.5);
        assert_eq!(settings.matching.top_rated_rating, 4.2);
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_effective_limit() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_limit(None), None);
        assert_eq!(settings.effective_limit(Some(10)), Some(10));
        assert_eq!(settings.effective_limit(Some(500)), Some(100));

        settings.matching.default_limit = Some(25);
        assert_eq!(settings.effective_limit(None), Some(25));
    }
}
