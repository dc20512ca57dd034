//! JWT issuance and validation.
//!
//! The signing key is injected at construction and lives for the process;
//! there is no rotation and no server-side revocation. Logout is client-side
//! token deletion.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::users::User;

/// JWT claims carried by every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id as string)
    pub sub: String,
    /// Role claim: true for admin users
    pub admin: bool,
    /// Issued at (UTC timestamp)
    pub iat: usize,
    /// Expiration time (UTC timestamp)
    pub exp: usize,
}

/// Authenticated caller identity, extracted from a verified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
    pub is_admin: bool,
}

pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, validity_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity: Duration::hours(validity_hours),
        }
    }

    /// Mint a signed token for a user whose credential was already verified.
    pub fn issue(&self, user: &User) -> Result<String, ApiError> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.validity)
            .ok_or_else(|| ApiError::InvalidArgument("token validity overflow".to_string()))?
            .timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            admin: user.is_admin,
            iat: now.timestamp() as usize,
            exp: expiration as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::InvalidArgument(format!("Failed to generate token: {}", e)))
    }

    /// Validate signature and expiry, and extract the caller identity.
    ///
    /// Stateless and side-effect free: verifying the same unexpired token
    /// twice yields the same `Identity`. Expired tokens are rejected with no
    /// grace window.
    pub fn verify(&self, token: &str) -> Result<Identity, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| ApiError::Unauthenticated("Invalid or expired token"))?;

        let user_id = token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| ApiError::Unauthenticated("Invalid or expired token"))?;

        Ok(Identity {
            user_id,
            is_admin: token_data.claims.admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(id: i64, is_admin: bool) -> User {
        User {
            id,
            full_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: String::new(),
            gender: String::new(),
            is_admin,
            created_at: Utc::now(),
        }
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("unit-test-secret", 24)
    }

    #[test]
    fn issue_then_verify_roundtrip() {
        let issuer = issuer();
        let token = issuer.issue(&test_user(42, false)).unwrap();
        assert!(!token.is_empty());

        let identity = issuer.verify(&token).unwrap();
        assert_eq!(identity.user_id, 42);
        assert!(!identity.is_admin);
    }

    #[test]
    fn role_claim_survives_roundtrip() {
        let issuer = issuer();
        let token = issuer.issue(&test_user(7, true)).unwrap();
        assert!(issuer.verify(&token).unwrap().is_admin);
    }

    #[test]
    fn verify_is_idempotent() {
        let issuer = issuer();
        let token = issuer.issue(&test_user(9, true)).unwrap();
        let first = issuer.verify(&token).unwrap();
        let second = issuer.verify(&token).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_token_signed_with_other_key() {
        let token = TokenIssuer::new("other-secret", 24)
            .issue(&test_user(1, false))
            .unwrap();
        assert!(issuer().verify(&token).is_err());
    }

    #[test]
    fn rejects_malformed_token() {
        assert!(issuer().verify("not.a.jwt").is_err());
        assert!(issuer().verify("").is_err());
    }

    /// Boundary: a token still valid for one second passes, an expired one
    /// fails with no grace window.
    #[test]
    fn expiry_boundary() {
        let issuer = issuer();
        let now = Utc::now().timestamp() as usize;

        let make_token = |exp: usize| {
            let claims = Claims {
                sub: "5".to_string(),
                admin: false,
                iat: now,
                exp,
            };
            encode(
                &Header::default(),
                &claims,
                &EncodingKey::from_secret("unit-test-secret".as_bytes()),
            )
            .unwrap()
        };

        // exp is comfortably in the future
        assert!(issuer.verify(&make_token(now + 60)).is_ok());
        // exp already passed
        assert!(issuer.verify(&make_token(now - 1)).is_err());
    }

    #[test]
    fn tampered_payload_fails_signature_check() {
        let issuer = issuer();
        let token = issuer.issue(&test_user(3, false)).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        // Payload of a token claiming admin, stitched onto our signature
        let forged = TokenIssuer::new("unit-test-secret", 24)
            .issue(&test_user(3, true))
            .unwrap();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        parts[1] = forged_parts[1];
        let spliced = parts.join(".");
        if spliced != forged {
            assert!(issuer.verify(&spliced).is_err());
        }
    }
}
