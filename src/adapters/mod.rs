//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - sqlx repositories
//! - `memory` - in-process repositories for tests and database-less runs
//! - `ai` - OpenAI counselor and converter, plus mocks
//! - `auth` - JWT session validation
//! - `http` - axum routers

pub mod ai;
pub mod auth;
pub mod http;
mod keywords;
pub mod memory;
pub mod postgres;
