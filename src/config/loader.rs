//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the upstream root URL.
pub const ENV_UPSTREAM_BASE_URL: &str = "UPSTREAM_BASE_URL";

/// Environment variable overriding the listener bind address.
pub const ENV_BIND_ADDRESS: &str = "GATEWAY_BIND_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Upstream(url::ParseError),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Upstream(e) => write!(f, "Upstream URL error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<url::ParseError> for ConfigError {
    fn from(err: url::ParseError) -> Self {
        ConfigError::Upstream(err)
    }
}

/// Load configuration: optional TOML file, environment overrides on top,
/// then semantic validation.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => GatewayConfig::default(),
    };

    apply_overrides(
        &mut config,
        env::var(ENV_UPSTREAM_BASE_URL).ok(),
        env::var(ENV_BIND_ADDRESS).ok(),
    );
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Environment wins over file values; empty variables are ignored.
fn apply_overrides(
    config: &mut GatewayConfig,
    base_url: Option<String>,
    bind_address: Option<String>,
) {
    if let Some(base_url) = base_url.filter(|value| !value.is_empty()) {
        config.upstream.base_url = base_url;
    }
    if let Some(bind_address) = bind_address.filter(|value| !value.is_empty()) {
        config.listener.bind_address = bind_address;
    }
}
