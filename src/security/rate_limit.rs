//! Fixed-window rate limiting middleware.

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;

use crate::config::RateLimitConfig;
use crate::http::error::GatewayError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Shared bucket for requests with no forwarded-for chain. The deployment
/// sits behind a single trusted reverse proxy, so a missing header means a
/// non-proxied caller; all of those share one budget.
const UNKNOWN_CLIENT: &str = "unknown";

struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window request counter keyed by client address.
///
/// Coarse by design: bursts of up to twice the limit can pass at a window
/// boundary, which is acceptable for abuse deterrence. Entries are never
/// evicted; the map grows with the distinct-client population for the
/// lifetime of the process.
pub struct RateLimiter {
    entries: DashMap<String, WindowEntry>,
    window: Duration,
    limit: u32,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_window(Duration::from_millis(config.window_ms), config.max_requests)
    }

    pub fn with_window(window: Duration, limit: u32) -> Self {
        Self {
            entries: DashMap::new(),
            window,
            limit,
        }
    }

    /// Record one request for `key`. Returns false when the key is over
    /// budget for the current window.
    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        // The entry guard holds the shard lock, so updates to one key never race.
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| WindowEntry {
                count: 0,
                reset_at: now + self.window,
            });

        if now >= entry.reset_at {
            entry.count = 0;
            entry.reset_at = now + self.window;
        }
        if entry.count >= self.limit {
            return false;
        }
        entry.count += 1;
        true
    }
}

/// First address in the forwarded-for chain, trimmed; the shared fallback
/// bucket otherwise.
pub fn client_key(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}

/// Middleware enforcing the per-client budget. Preflights pass uncounted;
/// browsers issue those on their own schedule, not per user action.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS {
        return next.run(request).await;
    }

    let key = client_key(&request);
    if state.limiter.allow(&key) {
        next.run(request).await
    } else {
        tracing::warn!(client = %key, "Rate limit exceeded");
        metrics::record_rate_limited();
        GatewayError::RateLimited.into_response()
    }
}
