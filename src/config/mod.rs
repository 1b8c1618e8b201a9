//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BridgeConfig (validated, immutable)
//! ```
//!
//! Config is read once at startup; changes require a restart.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::BridgeConfig;
pub use schema::BridgeRouteConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use validation::ValidationError;
