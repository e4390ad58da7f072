use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    pub filename_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename_prefix: "sales_report_shop_".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://cash.toromino.net".to_string(),
            },
            logging: LoggingConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://cash.toromino.net"

[logging]
level = "debug"

[export]
filename_prefix = "sales_report_shop_"
"#;

impl Config {
    /// `[logging] level` if it names a known level
    pub fn parsed_log_level(&self) -> Option<log::Level> {
        self.logging.level.parse().ok()
    }

    /// Log level from `[logging] level`, `Debug` when unrecognised
    pub fn log_level(&self) -> log::Level {
        self.parsed_log_level().unwrap_or(log::Level::Debug)
    }
}

/// Parse configuration from TOML text
pub fn load_config_from_str(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

/// Load the configuration embedded in the bundle.
///
/// Runs before logging is initialised, so the caller reports failures.
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from_str(DEFAULT_CONFIG)
}
