//! Order validation subsystem.
//!
//! # Data Flow
//! ```text
//! client JSON {items: [{itemId, quantity}]}
//!     → types.rs (strictly-typed untrusted candidate)
//!     → verify.rs (validate + re-price against Catalog)
//!     → VerifiedOrder (trusted, server-priced)
//! ```
//!
//! # Design Decisions
//! - Verification is a pure function: no I/O, no clock, no shared state
//! - Client-supplied prices are not part of the accepted schema; totals are
//!   always recomputed from the Catalog

pub mod types;
pub mod verify;

pub use types::{CartLine, OrderLine, ValidationError, VerifiedOrder};
pub use verify::verify;
