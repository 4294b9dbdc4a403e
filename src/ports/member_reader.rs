//! Member reader port.
//!
//! Members are registered elsewhere; the cart resolves the authenticated
//! email to a member record and works with its stable id from there on.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::member::Member;

/// Read-only lookup of registered members.
#[async_trait]
pub trait MemberReader: Send + Sync {
    /// Find a member by email.
    ///
    /// Returns `None` if no member is registered under that email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError>;
}
