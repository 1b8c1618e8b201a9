//! Payment redirect bridge library.
//!
//! Turns an HTTPS payment-provider callback into a redirect toward an app
//! URL scheme, carrying the callback's query parameters along.

pub mod bridge;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::BridgeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
