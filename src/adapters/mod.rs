//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Bearer token validation (HS256 JWT, mock)
//! - `http` - axum routes, handlers and auth middleware
//! - `memory` - In-memory stores for tests and local runs
//! - `postgres` - sqlx-backed repositories

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
