//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own router with DTOs and handlers; `app` assembles
//! them behind the auth middleware.

pub mod app;
pub mod consult;
pub mod converter;
pub mod data;
pub mod error;
pub mod health;
pub mod middleware;

pub use app::{build_router, cors_layer, with_http_layers, AppPorts};
pub use error::ErrorResponse;
pub use health::HealthResponse;
