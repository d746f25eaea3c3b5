//! Request admission control.
//!
//! # Responsibilities
//! - Enforce the single allowed browser origin and stamp CORS headers
//! - Bound per-client request volume with a fixed window
//!
//! Both run as middleware in front of the payment handler; a request only
//! reaches parsing after it has cleared origin policy and the rate limiter.

pub mod origin;
pub mod rate_limit;

pub use rate_limit::RateLimiter;
