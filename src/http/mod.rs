//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned and propagated)
//!     → bridge.rs (GET /pay/bridge) | health.rs (GET /health)
//!     → response.rs (redirect page or 400 page)
//!     → Send to client
//! ```

pub mod bridge;
pub mod health;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::RedirectPage;
pub use server::HttpServer;
