//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::{GatewayConfig, ProviderCredentials, PRODUCTION_BASE_URL};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
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

/// Load configuration: optional TOML file, then environment overrides, then
/// semantic validation.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let mut config: GatewayConfig = match path {
        Some(p) => {
            let content = fs::read_to_string(p).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => GatewayConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut GatewayConfig) {
    if let Ok(url) = env::var("APP_URL") {
        if !url.is_empty() {
            config.app.base_url = url;
        }
    }
    if env::var("PAYPAY_ENV").as_deref() == Ok("production") {
        config.provider.base_url = PRODUCTION_BASE_URL.to_string();
    }
    config.credentials = ProviderCredentials::from_env();
}

impl ProviderCredentials {
    /// Read the credential triple from the environment. Returns `None` when
    /// any piece is missing; the gateway then rejects payment requests with a
    /// configuration error instead of signing with partial credentials.
    pub fn from_env() -> Option<Self> {
        let api_key = secret("PAYPAY_API_KEY");
        let api_secret = secret("PAYPAY_API_SECRET");
        let merchant_id = secret("PAYPAY_MERCHANT_ID");

        Some(Self {
            api_key: api_key?,
            api_secret: api_secret?,
            merchant_id: merchant_id?,
        })
    }
}

fn secret(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(v) if !v.is_empty() => Some(v),
        _ => {
            tracing::warn!("{key} not set; payment requests will be rejected");
            None
        }
    }
}
