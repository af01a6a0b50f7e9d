//! Player configuration
//!
//! Layered the usual way: built-in defaults, then `podcastr.toml` (or the
//! file passed with `--config`), then `PODCASTR_*` environment variables.
//! Nested keys use a double underscore, e.g. `PODCASTR_CATALOG__BASE_URL`.

use podcastr_catalog::CatalogConfig;
use podcastr_core::DisplayLocale;
use podcastr_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PODCASTR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogSettings,
    pub playback: PlaybackConfig,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Episodes fetched when `--limit` is not given
    pub limit: usize,
    pub locale: DisplayLocale,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        let client = CatalogConfig::default();
        Self {
            base_url: client.base_url,
            timeout_secs: client.timeout_secs,
            limit: 12,
            locale: client.locale,
        }
    }
}

impl CatalogSettings {
    /// Client settings for these catalog options
    pub fn client_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            locale: self.locale,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directives; `RUST_LOG` still wins when set
    pub filter: Option<String>,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_sources(path, environment())
    }

    pub(crate) fn from_sources(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            // An explicit path must exist
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        let config: Self = settings.add_source(env).build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog.base_url must be set".into()));
        }
        if self.catalog.limit == 0 {
            return Err(ConfigError::Invalid(
                "catalog.limit must be at least 1".into(),
            ));
        }
        if self.catalog.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "catalog.timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcastr_playback::ShufflePolicy;
    use std::io::Write;

    fn env_from(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        environment().source(Some(map))
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = AppConfig::from_sources(None, env_from(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog.base_url, "http://localhost:3333");
        assert_eq!(config.catalog.limit, 12);
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.catalog.locale, DisplayLocale::PtBr);
        assert_eq!(config.playback.shuffle_policy, ShufflePolicy::Uniform);
        assert!(config.playback.seed.is_none());
        assert!(config.log.filter.is_none());
    }

    #[test]
    fn test_file_values() {
        let file = write_config(
            r#"
[catalog]
base_url = "https://api.podcastr.example"
limit = 4
locale = "enus"

[playback]
shuffle_policy = "avoid_repeat"
start_shuffling = true
seed = 7

[log]
filter = "podcastr=debug"
"#,
        );

        let config = AppConfig::from_sources(Some(file.path()), env_from(&[])).unwrap();

        assert_eq!(config.catalog.base_url, "https://api.podcastr.example");
        assert_eq!(config.catalog.limit, 4);
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.catalog.locale, DisplayLocale::EnUs);
        assert_eq!(config.playback.shuffle_policy, ShufflePolicy::AvoidRepeat);
        assert!(config.playback.start_shuffling);
        assert!(!config.playback.start_looping);
        assert_eq!(config.playback.seed, Some(7));
        assert_eq!(config.log.filter.as_deref(), Some("podcastr=debug"));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[catalog]\nlimit = 4\n");

        let config = AppConfig::from_sources(
            Some(file.path()),
            env_from(&[
                ("PODCASTR_CATALOG__LIMIT", "20"),
                ("PODCASTR_CATALOG__BASE_URL", "http://10.0.0.2:3333"),
                ("PODCASTR_PLAYBACK__START_LOOPING", "true"),
            ]),
        )
        .unwrap();

        assert_eq!(config.catalog.limit, 20);
        assert_eq!(config.catalog.base_url, "http://10.0.0.2:3333");
        assert!(config.playback.start_looping);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result = AppConfig::from_sources(Some(&missing), env_from(&[]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let file = write_config("[catalog]\nlimit = 0\n");

        let result = AppConfig::from_sources(Some(file.path()), env_from(&[]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_client_config_carries_settings() {
        let settings = CatalogSettings {
            base_url: "http://example.com".into(),
            timeout_secs: 3,
            limit: 1,
            locale: DisplayLocale::EnUs,
        };

        let client = settings.client_config();
        assert_eq!(client.base_url, "http://example.com");
        assert_eq!(client.timeout_secs, 3);
        assert_eq!(client.locale, DisplayLocale::EnUs);
    }
}
