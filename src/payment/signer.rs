//! Signed provider request construction.
//!
//! The canonical message is the newline-joined concatenation of method, path,
//! epoch seconds, nonce and the serialized body. Field order and the exact
//! body bytes matter; the body string carried in the envelope is the one that
//! was signed and must be the one transmitted.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

use crate::config::schema::ProviderCredentials;
use crate::order::VerifiedOrder;
use crate::payment::types::{
    CreateQrCodeRequest, Money, QrCodeOrderItem, CODE_TYPE_ORDER_QR, ORDER_CATEGORY,
    ORDER_DESCRIPTION, REDIRECT_TYPE_WEB_LINK,
};

type HmacSha256 = Hmac<Sha256>;

/// Namespace prefix for merchant payment ids.
const PAYMENT_ID_PREFIX: &str = "kirinji";

/// Provider endpoint for QR code creation.
pub const QRCODE_PATH: &str = "/v2/qrcode";

const METHOD: &str = "POST";
const AUTH_SCHEME: &str = "hmac OPA-Auth";

/// Everything needed for one outbound provider call. Ephemeral; built fresh
/// per gateway request and discarded after the call returns.
pub struct SignedEnvelope {
    pub method: &'static str,
    pub path: &'static str,
    pub merchant_payment_id: String,
    pub epoch: u64,
    pub nonce: String,
    pub body: String,
    pub auth_header: String,
}

/// Assemble the provider payload for a verified order and sign it.
pub fn build(
    order: &VerifiedOrder,
    credentials: &ProviderCredentials,
    redirect_url: &str,
) -> Result<SignedEnvelope, serde_json::Error> {
    let merchant_payment_id = generate_merchant_payment_id();
    let epoch = unix_time_secs();
    let nonce = generate_nonce();

    let order_items: Vec<QrCodeOrderItem> = order
        .lines
        .iter()
        .map(|line| QrCodeOrderItem {
            name: line.item_id.clone(),
            category: ORDER_CATEGORY.to_string(),
            quantity: line.quantity,
            product_id: line.item_id.clone(),
            unit_price: Money::jpy(u64::from(line.unit_price)),
        })
        .collect();

    let payload = CreateQrCodeRequest {
        merchant_payment_id: merchant_payment_id.clone(),
        amount: Money::jpy(order.total_amount),
        code_type: CODE_TYPE_ORDER_QR.to_string(),
        order_description: ORDER_DESCRIPTION.to_string(),
        order_items,
        redirect_url: redirect_url.to_string(),
        redirect_type: REDIRECT_TYPE_WEB_LINK.to_string(),
    };

    // Serialized once; these exact bytes are signed and transmitted.
    let body = serde_json::to_string(&payload)?;
    let signature = sign(METHOD, QRCODE_PATH, epoch, &nonce, &body, &credentials.api_secret);
    let auth_header = auth_header_value(&credentials.api_key, &nonce, epoch, &signature);

    Ok(SignedEnvelope {
        method: METHOD,
        path: QRCODE_PATH,
        merchant_payment_id,
        epoch,
        nonce,
        body,
        auth_header,
    })
}

/// HMAC-SHA256 over the canonical message, Base64-encoded.
pub fn sign(method: &str, path: &str, epoch: u64, nonce: &str, body: &str, api_secret: &str) -> String {
    let message = format!("{method}\n{path}\n{epoch}\n{nonce}\n{body}");
    let mut mac =
        HmacSha256::new_from_slice(api_secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// `hmac OPA-Auth:{apiKey}:{nonce}:{epoch}:{signature}`
pub fn auth_header_value(api_key: &str, nonce: &str, epoch: u64, signature: &str) -> String {
    format!("{AUTH_SCHEME}:{api_key}:{nonce}:{epoch}:{signature}")
}

/// Fresh id per attempt: namespace, millisecond timestamp, random suffix.
/// Uniqueness is best-effort; the provider deduplicates by this id.
fn generate_merchant_payment_id() -> String {
    let mut suffix = [0u8; 4];
    rand::thread_rng().fill(&mut suffix);
    format!("{PAYMENT_ID_PREFIX}_{}_{}", unix_time_millis(), hex_encode(&suffix))
}

/// Single-use random value, deters replay in combination with the signature.
fn generate_nonce() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill(&mut bytes);
    hex_encode(&bytes)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn unix_time_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn unix_time_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
