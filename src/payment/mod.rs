//! PayPay integration subsystem.
//!
//! # Data Flow
//! ```text
//! VerifiedOrder
//!     → signer.rs (payload + canonical message + HMAC → SignedEnvelope)
//!     → client.rs (single POST /v2/qrcode, bounded timeout)
//!     → PaymentAccepted {url, merchantPaymentId} | ProviderError
//! ```
//!
//! # Design Decisions
//! - The body is serialized exactly once; the same bytes are signed and
//!   transmitted, or the provider rejects the signature
//! - One attempt per client call, no retries; a failed call surfaces
//!   immediately and re-submission is the client's decision

pub mod client;
pub mod signer;
pub mod types;

pub use client::{ProviderClient, ProviderError};
pub use signer::SignedEnvelope;
