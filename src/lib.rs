//! Shopping Cart - Member-scoped cart service
//!
//! Members add catalog items to a cart, list it, change quantities and
//! remove lines. Every line mutation is gated on the requester owning the
//! cart.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
