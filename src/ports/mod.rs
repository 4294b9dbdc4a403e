//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Catalog and member lookups (external collaborators)
//!
//! - `ItemReader` - Resolve catalog items by id
//! - `MemberReader` - Resolve members by email
//!
//! ## Cart persistence
//!
//! - `CartRepository` - Cart lookups, one cart per member
//! - `CartItemRepository` - Cart lines, unique per (cart, item); owns the
//!   atomic add that lazily creates the cart
//! - `CartReader` - Listing query joining lines with item display data
//!
//! ## Identity
//!
//! - `SessionValidator` - Bearer token validation

mod cart_item_repository;
mod cart_reader;
mod cart_repository;
mod item_reader;
mod member_reader;
mod session_validator;

pub use cart_item_repository::{AddedLine, CartItemRepository};
pub use cart_reader::{CartDetail, CartReader};
pub use cart_repository::CartRepository;
pub use item_reader::ItemReader;
pub use member_reader::MemberReader;
pub use session_validator::SessionValidator;
