//! `/api/payment` handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::http::error::GatewayError;
use crate::http::server::AppState;
use crate::order::{self, CartLine};
use crate::payment::signer;

/// Inbound payment request body. Anything beyond (item, quantity) pairs —
/// client-asserted prices included — is not part of the schema and never
/// reaches pricing.
#[derive(Debug, Deserialize)]
pub struct PaymentOrder {
    pub items: Vec<CartLine>,
}

/// Turn a cart into a provider QR code URL.
///
/// Origin policy and rate limiting have already run as middleware by the
/// time this executes; the stages here are verify → credentials → sign →
/// provider call.
pub async fn create_payment(
    State(state): State<AppState>,
    payload: Result<Json<PaymentOrder>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::error!(error = %e, "Malformed payment request body");
        GatewayError::Unexpected
    })?;

    let order = order::verify(&payload.items, &state.catalog)?;

    let credentials = state.config.credentials.as_ref().ok_or_else(|| {
        tracing::error!("PayPay credentials missing from environment");
        GatewayError::Configuration
    })?;

    let envelope = signer::build(&order, credentials, &state.config.app.redirect_url())
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to serialize provider payload");
            GatewayError::Unexpected
        })?;

    tracing::debug!(
        merchant_payment_id = %envelope.merchant_payment_id,
        amount = order.total_amount,
        lines = order.lines.len(),
        "Submitting QR code request"
    );

    let accepted = state.provider.create_qr_code(&envelope).await?;

    tracing::info!(
        merchant_payment_id = %accepted.merchant_payment_id,
        amount = order.total_amount,
        "Payment request accepted"
    );

    Ok((StatusCode::OK, Json(accepted)))
}

/// CORS preflight. No body; the origin middleware stamps the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
