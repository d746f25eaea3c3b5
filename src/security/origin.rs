//! Origin enforcement and CORS headers.
//!
//! # Design Decisions
//! - A present `Origin` header must match the configured origin exactly;
//!   absence is allowed (non-browser clients, same-origin navigations)
//! - Every response carries the same CORS header set, including rejections
//!   and preflight answers, so the browser can always read the outcome

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::error::GatewayError;
use crate::http::server::AppState;

/// Middleware rejecting foreign origins and stamping CORS headers on every
/// response that leaves the gateway.
pub async fn origin_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if origin.as_bytes() != state.allowed_origin.as_bytes() {
            tracing::warn!(origin = ?origin, "Origin rejected");
            let mut response = GatewayError::OriginRejected.into_response();
            apply_cors_headers(response.headers_mut(), &state.allowed_origin);
            return response;
        }
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut(), &state.allowed_origin);
    response
}

fn apply_cors_headers(headers: &mut HeaderMap, allowed_origin: &str) {
    if let Ok(origin) = HeaderValue::from_str(allowed_origin) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_header_set() {
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers, "https://shop.example");

        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://shop.example"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "POST, OPTIONS"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Content-Type"
        );
    }
}
