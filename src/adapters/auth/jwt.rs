//! HS256 JWT adapter for bearer token validation.
//!
//! Implements `SessionValidator` against a shared signing secret:
//!
//! 1. Verifies the HMAC-SHA256 signature
//! 2. Validates issuer, audience, and expiry claims
//! 3. Requires an `email` claim, which the cart uses to resolve the member
//!
//! # Example
//!
//! ```ignore
//! use shopping_cart::adapters::auth::JwtSessionValidator;
//!
//! let validator = JwtSessionValidator::new(b"secret", "shopping-cart", "shopping-cart-api");
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by cart access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartClaims {
    /// Subject - the identity provider's user id
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Audience - array or single string
    pub aud: Audience,

    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,

    /// Issued at timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// User's email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// User's display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CartClaims {
    /// Claims for `email`, valid for `ttl` from now.
    pub fn new(
        sub: impl Into<String>,
        email: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: sub.into(),
            iss: issuer.into(),
            aud: Audience::Single(audience.into()),
            exp: (now + ttl).timestamp(),
            iat: Some(now.timestamp()),
            email: Some(email.into()),
            name: None,
        }
    }
}

/// Audience can be a single string or array of strings in JWTs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

/// Validates HS256 bearer tokens with a shared secret.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
}

impl JwtSessionValidator {
    /// Creates a validator for the given secret, issuer and audience.
    pub fn new(secret: &[u8], issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            encoding_key: EncodingKey::from_secret(secret),
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Creates a validator from application configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.secret_bytes(), &config.issuer, &config.audience)
    }

    /// Signs claims with the configured secret.
    ///
    /// Used by tests and local tooling; production tokens come from the
    /// identity provider sharing the secret.
    pub fn issue(&self, claims: &CartClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            AuthError::service_unavailable("token signing failed")
        })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = decode::<CartClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Invalid issuer in token");
                        AuthError::InvalidToken
                    }
                    ErrorKind::InvalidAudience => {
                        tracing::warn!("Invalid audience in token");
                        AuthError::InvalidToken
                    }
                    _ => {
                        tracing::warn!("Token validation failed: {}", e);
                        AuthError::InvalidToken
                    }
                }
            })?
            .claims;

        let email = claims
            .email
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| {
                tracing::warn!("Token missing email claim");
                AuthError::InvalidToken
            })?;

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Empty subject in token");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, email, claims.name))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish_non_exhaustive()
    }
}
