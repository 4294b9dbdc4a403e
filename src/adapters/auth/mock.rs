//! Mock session validator for testing.
//!
//! Maps opaque tokens straight to users so HTTP tests can authenticate
//! without minting JWTs.
//!
//! # Example
//!
//! ```ignore
//! use shopping_cart::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_email("token-a", "alice@example.com");
//! let user = validator.validate("token-a").await?;
//! assert_eq!(user.email, "alice@example.com");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Mock session validator.
///
/// Tokens not in the table return `InvalidToken`.
#[derive(Debug, Default, Clone)]
pub struct MockSessionValidator {
    tokens: HashMap<String, AuthenticatedUser>,
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Adds a valid token for the given email.
    ///
    /// The subject is derived from the local part of the address.
    pub fn with_email(self, token: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        let subject = email.split('@').next().unwrap_or_default();
        let subject = if subject.is_empty() { "anonymous" } else { subject };
        let Ok(id) = UserId::new(subject) else {
            return self;
        };
        self.with_user(token, AuthenticatedUser::new(id, email, None))
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
