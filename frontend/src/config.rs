use log::LevelFilter;
use thiserror::Error;

const DEFAULT_HELPER_API: &str = "/helper/api";
const DEFAULT_ADMIN_API: &str = "/admin/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("HOUSEHOLD_LOG_LEVEL must be one of off, error, warn, info, debug, trace, got {0:?}")]
    InvalidLogLevel(String),
}

/// Client configuration, fixed when the bundle is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub helper_api_root: String,
    pub admin_api_root: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            helper_api_root: DEFAULT_HELPER_API.to_string(),
            admin_api_root: DEFAULT_ADMIN_API.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Reads the `HOUSEHOLD_*` variables captured at compile time.
    ///
    /// A malformed value falls back to the defaults; the error is returned
    /// alongside so it can be logged once the logger is up.
    pub fn from_env() -> (Self, Option<ConfigError>) {
        match Self::from_vars(
            option_env!("HOUSEHOLD_HELPER_API"),
            option_env!("HOUSEHOLD_ADMIN_API"),
            option_env!("HOUSEHOLD_LOG_LEVEL"),
        ) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn from_vars(
        helper_api: Option<&str>,
        admin_api: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            None => LevelFilter::Info,
            Some(raw) => raw
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?,
        };

        Ok(Self {
            helper_api_root: api_root(helper_api, DEFAULT_HELPER_API),
            admin_api_root: api_root(admin_api, DEFAULT_ADMIN_API),
            log_level,
        })
    }
}

fn api_root(value: Option<&str>, default: &str) -> String {
    value
        .map(|v| v.trim().trim_end_matches('/'))
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_vars(None, None, None).unwrap();

        assert_eq!(config.helper_api_root, "/helper/api");
        assert_eq!(config.admin_api_root, "/admin/api");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_from_vars() {
        let config = Config::from_vars(
            Some("https://home.example/helper/api/"),
            Some("/api/admin"),
            Some("DEBUG"),
        )
        .unwrap();

        assert_eq!(config.helper_api_root, "https://home.example/helper/api");
        assert_eq!(config.admin_api_root, "/api/admin");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = Config::from_vars(Some("  "), Some(""), Some(" ")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_log_level() {
        let err = Config::from_vars(None, None, Some("loud")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_string()));
    }
}
