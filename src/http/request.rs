//! Request identification.
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - UUID v4 per request, echoed back on the response

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// UUID v4 request id source for `SetRequestIdLayer`.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_ids_are_unique_and_header_safe() {
        let mut make = MakeRequestUuid;
        let request = Request::builder().body(Body::empty()).unwrap();

        let a = make.make_request_id(&request).expect("id");
        let b = make.make_request_id(&request).expect("id");
        assert_ne!(a.header_value(), b.header_value());
    }
}
