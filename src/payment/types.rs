//! PayPay wire types.

use serde::{Deserialize, Serialize};

/// All amounts are whole JPY.
pub const CURRENCY: &str = "JPY";

/// QR code type for dynamic order payments.
pub const CODE_TYPE_ORDER_QR: &str = "ORDER_QR";

/// Redirect the customer through a plain web link after checkout.
pub const REDIRECT_TYPE_WEB_LINK: &str = "WEB_LINK";

/// Category reported to the provider for every order item.
pub const ORDER_CATEGORY: &str = "ラーメン";

/// Human-readable order description shown in the PayPay app.
pub const ORDER_DESCRIPTION: &str = "カスラーメン自家製麺キリンジ";

/// Result code the provider uses for an accepted request.
pub const SUCCESS_CODE: &str = "SUCCESS";

/// Monetary amount in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: u64,
    pub currency: String,
}

impl Money {
    pub fn jpy(amount: u64) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
        }
    }
}

/// One line of the provider-facing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeOrderItem {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub product_id: String,
    pub unit_price: Money,
}

/// Body of `POST /v2/qrcode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQrCodeRequest {
    pub merchant_payment_id: String,
    pub amount: Money,
    pub code_type: String,
    pub order_description: String,
    pub order_items: Vec<QrCodeOrderItem>,
    pub redirect_url: String,
    pub redirect_type: String,
}

/// Nested result descriptor in every provider response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultInfo {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Payload of a successful QR code creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QrCodeData {
    pub url: Option<String>,
}

/// Provider response envelope. HTTP-level success alone does not mean the
/// request was accepted; `result_info.code` must also say so.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateQrCodeResponse {
    pub result_info: ResultInfo,
    pub data: QrCodeData,
}

/// Client-facing success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccepted {
    pub url: String,
    pub merchant_payment_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_request_serializes_to_provider_field_names() {
        let request = CreateQrCodeRequest {
            merchant_payment_id: "kirinji_1700000000000_deadbeef".to_string(),
            amount: Money::jpy(2050),
            code_type: CODE_TYPE_ORDER_QR.to_string(),
            order_description: ORDER_DESCRIPTION.to_string(),
            order_items: vec![QrCodeOrderItem {
                name: "こってり".to_string(),
                category: ORDER_CATEGORY.to_string(),
                quantity: 2,
                product_id: "こってり".to_string(),
                unit_price: Money::jpy(950),
            }],
            redirect_url: "https://shop.example/complete".to_string(),
            redirect_type: REDIRECT_TYPE_WEB_LINK.to_string(),
        };

        let value: Value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["merchantPaymentId"], "kirinji_1700000000000_deadbeef");
        assert_eq!(value["amount"]["amount"], 2050);
        assert_eq!(value["amount"]["currency"], "JPY");
        assert_eq!(value["codeType"], "ORDER_QR");
        assert_eq!(value["orderItems"][0]["productId"], "こってり");
        assert_eq!(value["orderItems"][0]["unitPrice"]["amount"], 950);
        assert_eq!(value["redirectType"], "WEB_LINK");
    }

    #[test]
    fn test_response_deserializes_success_shape() {
        let raw = r#"{
            "resultInfo": {"code": "SUCCESS", "message": "Success", "codeId": "08100001"},
            "data": {"url": "https://qr.example/o/abc", "deeplink": "paypay://x"}
        }"#;

        let response: CreateQrCodeResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.result_info.code.as_deref(), Some(SUCCESS_CODE));
        assert_eq!(response.data.url.as_deref(), Some("https://qr.example/o/abc"));
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: CreateQrCodeResponse = serde_json::from_str("{}").unwrap();
        assert!(response.result_info.code.is_none());
        assert!(response.data.url.is_none());
    }
}
