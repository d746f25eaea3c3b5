//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, defaults otherwise)
//!     → environment overrides (APP_URL, PAYPAY_ENV, PAYPAY_* credentials)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow running with no file at all
//! - Secrets never live in the file; they come from the environment only

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::{GatewayConfig, ProviderCredentials, RateLimitConfig};
