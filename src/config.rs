use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::server::ServiceKind;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Per-service configuration loaded from an optional file + environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Built-in defaults for a service, used when nothing overrides them.
    pub fn defaults(kind: ServiceKind) -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: kind.default_port(),
            },
            logging: LoggingSection::default(),
        }
    }

    /// Load configuration for `kind`.
    ///
    /// The file named by `{PREFIX}_CONFIG` (default `{binary}.toml`) is read
    /// if it exists, then `{PREFIX}_*` environment variables are applied on top.
    pub fn load(kind: ServiceKind) -> Result<Self> {
        let config_path = env::var(format!("{}_CONFIG", kind.env_prefix()))
            .unwrap_or_else(|_| format!("{}.toml", kind.binary_name()));

        Self::load_from(kind, Path::new(&config_path))
    }

    /// Load configuration for `kind` using an explicit file path.
    pub fn load_from(kind: ServiceKind, config_path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(kind.default_port()))?;

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(kind.env_prefix())
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = DEFAULT_LOG_LEVEL.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::invalid_config("server.host must be specified"));
        }
        if self.server.port == 0 {
            return Err(Error::invalid_config("server.port must be non-zero"));
        }
        Ok(())
    }

    /// `host:port` string suitable for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
