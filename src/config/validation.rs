//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (windows and timeouts > 0)
//! - Check that base URLs actually parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// One semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("rate limit window must be greater than zero")]
    ZeroRateLimitWindow,

    #[error("rate limit budget must be greater than zero")]
    ZeroRateLimitBudget,

    #[error("provider timeout must be greater than zero")]
    ZeroProviderTimeout,

    #[error("invalid provider base URL: {0}")]
    InvalidProviderUrl(String),

    #[error("invalid app base URL: {0}")]
    InvalidAppUrl(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.rate_limit.window_ms == 0 {
        errors.push(ValidationError::ZeroRateLimitWindow);
    }
    if config.rate_limit.max_requests == 0 {
        errors.push(ValidationError::ZeroRateLimitBudget);
    }
    if config.provider.timeout_secs == 0 {
        errors.push(ValidationError::ZeroProviderTimeout);
    }
    if Url::parse(&config.provider.base_url).is_err() {
        errors.push(ValidationError::InvalidProviderUrl(
            config.provider.base_url.clone(),
        ));
    }
    if Url::parse(&config.app.base_url).is_err() {
        errors.push(ValidationError::InvalidAppUrl(config.app.base_url.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GatewayConfig::default()), Ok(()));
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.rate_limit.max_requests = 0;
        config.provider.base_url = "not a url".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroRateLimitBudget));
    }

    #[test]
    fn test_zero_windows_rejected() {
        let mut config = GatewayConfig::default();
        config.rate_limit.window_ms = 0;
        config.provider.timeout_secs = 0;
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroRateLimitWindow));
        assert!(errors.contains(&ValidationError::ZeroProviderTimeout));
        assert!(errors.contains(&ValidationError::ZeroRequestTimeout));
    }
}
