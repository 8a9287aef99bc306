//! Signed session tokens.
//!
//! Tokens are stateless, self-contained JWTs (HS256) carrying the
//! account's identity claims and an expiry. Verification needs nothing
//! but the shared secret, so the API layer can authenticate requests
//! without a session store.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Identity claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account id.
    pub sub: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account role (`user` or `admin`).
    pub role: String,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
}

/// Issues and verifies signed session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
}

impl TokenService {
    /// Create a token service from the shared signing secret.
    #[must_use]
    pub fn new(secret: &str, expiry_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry: Duration::days(expiry_days),
        }
    }

    /// Issue a signed token for the given identity.
    pub fn issue(&self, id: &str, name: &str, email: &str, role: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            exp: (now + self.expiry).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Verify a token and return its claims.
    ///
    /// Expired, malformed, or tampered tokens all map to `Unauthorized`;
    /// no detail about the failure reason leaks to the caller.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 7)
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let svc = service();
        let token = svc.issue("u1", "Alice", "alice@example.com", "user").unwrap();

        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, "user");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let svc = service();
        let token = svc.issue("u1", "Alice", "alice@example.com", "user").unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(matches!(svc.verify(&tampered), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service()
            .issue("u1", "Alice", "alice@example.com", "user")
            .unwrap();

        let other = TokenService::new("other-secret", 7);
        assert!(matches!(other.verify(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative expiry produces an already-expired token
        let svc = TokenService::new("test-secret", -1);
        let token = svc.issue("u1", "Alice", "alice@example.com", "user").unwrap();

        assert!(matches!(svc.verify(&token), Err(AppError::Unauthorized)));
    }
}
