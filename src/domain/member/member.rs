//! Registered member entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MemberId, ValidationError};

/// A registered shopper. Email is unique across members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    email: String,
    name: String,
}

impl Member {
    /// Create a member.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if email is blank
    /// - `InvalidFormat` if email has no `@`
    pub fn new(
        id: MemberId,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(Self {
            id,
            email,
            name: name.into(),
        })
    }

    /// Reconstitute a member from persistence (no validation).
    pub fn reconstitute(id: MemberId, email: String, name: String) -> Self {
        Self { id, email, name }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_member_keeps_fields() {
        let member = Member::new(MemberId::new(), "a@shop.test", "Alice").unwrap();
        assert_eq!(member.email(), "a@shop.test");
        assert_eq!(member.name(), "Alice");
    }

    #[test]
    fn rejects_email_without_at_sign() {
        assert!(matches!(
            Member::new(MemberId::new(), "alice", "Alice"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_blank_email() {
        assert!(matches!(
            Member::new(MemberId::new(), "", "Alice"),
            Err(ValidationError::EmptyField { .. })
        ));
    }
}
