//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `jwt` - HS256 bearer tokens signed with a shared secret
//! - `mock` - Fixed token table for tests and local development

mod jwt;
mod mock;

pub use jwt::{CartClaims, JwtSessionValidator};
pub use mock::MockSessionValidator;
