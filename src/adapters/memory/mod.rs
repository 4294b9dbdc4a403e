//! In-memory adapters for tests and local development.

mod cart_store;
mod catalog;

pub use cart_store::InMemoryCartStore;
pub use catalog::InMemoryCatalog;
