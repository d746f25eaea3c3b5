//! Cart and order types.

use serde::Deserialize;
use thiserror::Error;

/// One untrusted cart line as submitted by the client.
///
/// Quantity is kept as a raw JSON number so that non-integral values reach
/// the verifier and are rejected with a proper error instead of failing
/// opaquely at the deserialization layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CartLine {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub quantity: f64,
}

/// One verified line: server-priced, integral quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: String,
    pub quantity: u32,
    pub unit_price: u32,
}

/// A cart that passed verification. The total is always recomputed from the
/// catalog, never taken from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedOrder {
    pub lines: Vec<OrderLine>,
    pub total_amount: u64,
}

/// Rejection reasons for a submitted cart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("カートが空です")]
    EmptyCart,

    #[error("数量が不正です: {0}")]
    InvalidQuantity(f64),

    #[error("存在しないメニューです: {0}")]
    UnknownItem(String),
}
