use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::csv::{CsvSourceConfig, OutputFormat};
use crate::domain::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "csvtable.toml";
pub const ENV_PREFIX: &str = "CSVTABLE_";
const ENV_CONFIG_PATH: &str = "CSVTABLE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: CsvSourceConfig,
    pub output: OutputFormat,
    /// Serve over HTTP instead of printing once to stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpConfig>,
}

/// Layers defaults, an optional TOML file and `CSVTABLE_*` env vars
pub struct ConfigService {
    config_path: PathBuf,
}

impl ConfigService {
    pub fn new() -> Self {
        let config_path = std::env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self { config_path }
    }

    pub fn with_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(&self.config_path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__"))
    }

    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment()
            .extract()
            .map_err(|err| AppError::ConfigError(err.to_string()))?;

        config
            .source
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid source config: {}", e)))?;

        info!(
            config_file = %self.config_path.display(),
            path = %config.source.path.display(),
            output = %config.output,
            "configuration loaded"
        );
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = ConfigService::with_config_path("missing.toml")
                .load()
                .expect("defaults load");

            assert_eq!(config, AppConfig::default());
            assert!(config.http.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "csvtable.toml",
                r#"
                    output = "html"

                    [source]
                    path = "data.csv"
                    delimiter = ","
                    key_prefix = "f_"

                    [http]
                    port = 9000
                "#,
            )?;
            jail.set_env("CSVTABLE_SOURCE__KEY_PREFIX", "c");
            jail.set_env("CSVTABLE_SOURCE__FIRST_ROW_IS_HEADERS", "false");

            let config = ConfigService::with_config_path("csvtable.toml")
                .load()
                .expect("layered load");

            assert_eq!(config.output, OutputFormat::Html);
            assert_eq!(config.source.path, PathBuf::from("data.csv"));
            assert_eq!(config.source.delimiter, ',');
            assert_eq!(config.source.key_prefix, "c");
            assert!(!config.source.first_row_is_headers);

            let http = config.http.expect("http section");
            assert_eq!(http.port, 9000);
            assert_eq!(http.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_source_config_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("CSVTABLE_SOURCE__DELIMITER", "§");

            let result = ConfigService::with_config_path("missing.toml").load();
            assert!(matches!(result, Err(AppError::ValidationError(_))));
            Ok(())
        });
    }
}
