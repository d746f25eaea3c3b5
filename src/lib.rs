//! Kirinji order-payment gateway library.

pub mod catalog;
pub mod config;
pub mod http;
pub mod observability;
pub mod order;
pub mod payment;
pub mod security;

pub use config::GatewayConfig;
pub use http::HttpServer;
