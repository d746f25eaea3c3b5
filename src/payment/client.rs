//! Outbound provider client.
//!
//! # Responsibilities
//! - Issue the single POST to the QR code creation endpoint
//! - Enforce an explicit request timeout; expiry is a provider failure
//! - Map provider responses to a client-facing outcome
//! - Log the full provider response on failure for diagnostics

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use thiserror::Error;

use crate::observability::metrics;
use crate::payment::signer::SignedEnvelope;
use crate::payment::types::{CreateQrCodeResponse, PaymentAccepted, SUCCESS_CODE};

/// Fallback message when the provider gives none.
const GENERIC_PROVIDER_ERROR: &str = "PayPay APIエラー";

/// A rejected or failed provider call. Transport failures and timeouts carry
/// the generic message; provider rejections surface the provider's own.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    fn generic() -> Self {
        Self {
            message: GENERIC_PROVIDER_ERROR.to_string(),
        }
    }
}

/// HTTP client for the payment provider.
#[derive(Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProviderClient {
    /// Build a client for the given provider base URL with a bounded
    /// per-request timeout.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Create a QR code payment. One attempt; no retry on any failure.
    pub async fn create_qr_code(
        &self,
        envelope: &SignedEnvelope,
    ) -> Result<PaymentAccepted, ProviderError> {
        let url = format!("{}{}", self.base_url, envelope.path);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, &envelope.auth_header)
            .body(envelope.body.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, merchant_payment_id = %envelope.merchant_payment_id, "PayPay request failed");
                metrics::record_provider_call("transport_error");
                ProviderError::generic()
            })?;

        let status = response.status();
        let raw = response.text().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read PayPay response body");
            metrics::record_provider_call("transport_error");
            ProviderError::generic()
        })?;

        // A response that is not JSON is treated like an empty one; the
        // success-code check below fails it either way.
        let parsed: CreateQrCodeResponse = serde_json::from_str(&raw).unwrap_or_default();

        if !status.is_success() || parsed.result_info.code.as_deref() != Some(SUCCESS_CODE) {
            tracing::error!(
                status = %status,
                merchant_payment_id = %envelope.merchant_payment_id,
                response = %raw,
                "PayPay rejected QR code request"
            );
            metrics::record_provider_call("rejected");
            return Err(ProviderError {
                message: parsed
                    .result_info
                    .message
                    .unwrap_or_else(|| GENERIC_PROVIDER_ERROR.to_string()),
            });
        }

        match parsed.data.url {
            Some(url) => {
                metrics::record_provider_call("success");
                Ok(PaymentAccepted {
                    url,
                    merchant_payment_id: envelope.merchant_payment_id.clone(),
                })
            }
            None => {
                tracing::error!(response = %raw, "PayPay success response missing redirect URL");
                metrics::record_provider_call("rejected");
                Err(ProviderError::generic())
            }
        }
    }
}
