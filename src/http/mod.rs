//! HTTP gateway subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/payment
//!     → server.rs (router + middleware stack)
//!     → security::origin (origin policy, CORS headers)
//!     → security::rate_limit (per-client budget)
//!     → payment.rs (verify cart → sign → provider call)
//!     → error.rs (any failure → JSON error body)
//! ```

pub mod error;
pub mod payment;
pub mod request;
pub mod server;

pub use error::GatewayError;
pub use request::MakeRequestUuid;
pub use server::{AppState, HttpServer};
