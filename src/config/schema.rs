//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files;
//! provider credentials are the exception and only ever come from the
//! environment.

use serde::{Deserialize, Serialize};

/// Sandbox provider host.
pub const SANDBOX_BASE_URL: &str = "https://stg.paypay.ne.jp";

/// Production provider host.
pub const PRODUCTION_BASE_URL: &str = "https://api.paypay.ne.jp";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Inbound request timeout.
    pub timeouts: TimeoutConfig,

    /// Per-client rate limiting.
    pub rate_limit: RateLimitConfig,

    /// Payment provider endpoint settings.
    pub provider: ProviderConfig,

    /// Application origin and redirect settings.
    pub app: AppConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Provider credentials, environment-sourced. May be absent at startup;
    /// payment requests fail with a configuration error until they are set.
    #[serde(skip)]
    pub credentials: Option<ProviderCredentials>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout for inbound calls, seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Fixed window duration in milliseconds.
    pub window_ms: u64,

    /// Requests allowed per client key per window.
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: 60_000,
            max_requests: 10,
        }
    }
}

/// Payment provider endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider base URL; sandbox by default, switched to production via
    /// `PAYPAY_ENV=production`.
    pub base_url: String,

    /// Timeout for the outbound provider call, seconds. Expiry is treated as
    /// a provider failure, never a hang.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: SANDBOX_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Application origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Public base URL of the ordering front-end. Doubles as the single
    /// allowed browser origin and the base of the post-checkout redirect.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jikaseimenkirinji.vercel.app".to_string(),
        }
    }
}

impl AppConfig {
    /// The one origin allowed to call the API (exact match).
    pub fn allowed_origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Where the provider sends the customer after checkout.
    pub fn redirect_url(&self) -> String {
        format!("{}/complete", self.base_url.trim_end_matches('/'))
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9100".to_string(),
        }
    }
}

/// Provider API credentials. All three must be present before the gateway
/// will sign anything.
#[derive(Debug, Clone)]
pub struct ProviderCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub merchant_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.rate_limit.window_ms, 60_000);
        assert_eq!(config.rate_limit.max_requests, 10);
        assert_eq!(config.provider.base_url, SANDBOX_BASE_URL);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_minimal_toml_overlays_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [rate_limit]
            max_requests = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.rate_limit.max_requests, 5);
        assert_eq!(config.rate_limit.window_ms, 60_000);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_origin_and_redirect_derivation() {
        let app = AppConfig {
            base_url: "https://shop.example/".to_string(),
        };
        assert_eq!(app.allowed_origin(), "https://shop.example");
        assert_eq!(app.redirect_url(), "https://shop.example/complete");
    }
}
