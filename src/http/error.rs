//! Error boundary: gateway failures → JSON responses.
//!
//! Every failure is caught here and converted to a `{error}` body with an
//! appropriate status; nothing propagates past the handler layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::order::ValidationError;
use crate::payment::ProviderError;

/// Everything that can go wrong between receiving a cart and answering the
/// client.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Provider credentials missing from the environment.
    #[error("PayPay環境変数が未設定です")]
    Configuration,

    #[error("許可されていないオリジンです")]
    OriginRejected,

    #[error("リクエストが多すぎます。しばらく待ってからお試しください")]
    RateLimited,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Anything that should never happen. Details go to the log, never to
    /// the client.
    #[error("サーバーエラー")]
    Unexpected,
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::OriginRejected => StatusCode::FORBIDDEN,
            GatewayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Provider(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(GatewayError::Configuration.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(GatewayError::OriginRejected.status(), StatusCode::FORBIDDEN);
        assert_eq!(GatewayError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            GatewayError::Validation(ValidationError::EmptyCart).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(GatewayError::Unexpected.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = GatewayError::Validation(ValidationError::UnknownItem("生卵".to_string()));
        assert!(err.to_string().contains("生卵"));
    }

    #[test]
    fn test_provider_message_passes_through() {
        let err = GatewayError::Provider(ProviderError {
            message: "Invalid request params".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid request params");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
