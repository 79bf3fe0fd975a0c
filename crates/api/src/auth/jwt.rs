//! HS256 bearer tokens naming the acting user.
//!
//! Tokens are minted by the identity service that owns user accounts; this
//! server shares its secret and only checks them. [`generate_access_token`]
//! exists for local tooling and the test suite.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use feed_core::types::DbId;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Token payload. Only `sub` is used for authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id of the caller.
    pub sub: DbId,
    pub exp: i64,
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret.
    pub secret: String,
    /// Lifetime of tokens minted by [`generate_access_token`].
    pub access_token_expiry_mins: i64,
    /// When set, tokens must carry this `iss`.
    pub issuer: Option<String>,
    /// Clock skew tolerated on `exp`.
    pub leeway_secs: u64,
}

impl JwtConfig {
    /// | Env Var                  | Default     |
    /// |--------------------------|-------------|
    /// | `JWT_SECRET`             | required    |
    /// | `JWT_ACCESS_EXPIRY_MINS` | `15`        |
    /// | `JWT_ISSUER`             | unset       |
    /// | `JWT_LEEWAY_SECS`        | `30`        |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, or a number fails to parse.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        let number = |key: &str, default: i64| -> i64 {
            std::env::var(key)
                .map(|raw| {
                    raw.parse()
                        .unwrap_or_else(|e| panic!("{key} must be an integer: {e}"))
                })
                .unwrap_or(default)
        };

        Self {
            secret,
            access_token_expiry_mins: number("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS),
            issuer: std::env::var("JWT_ISSUER").ok().filter(|s| !s.is_empty()),
            leeway_secs: number("JWT_LEEWAY_SECS", DEFAULT_LEEWAY_SECS as i64).max(0) as u64,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }
        validation
    }
}

/// Mint a token for `user_id`, stamped with the configured issuer.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: iat + config.access_token_expiry_mins * 60,
        iat,
        iss: config.issuer.clone(),
        jti: Some(Uuid::new_v4().to_string()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature, expiry and (if configured) issuer, returning the claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &config.validation(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret".to_string(),
            access_token_expiry_mins: 5,
            issuer: None,
            leeway_secs: 0,
        }
    }

    #[test]
    fn token_carries_user_id() {
        let token = generate_access_token(42, &config()).unwrap();
        let claims = validate_token(&token, &config()).unwrap();
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
        assert!(claims.jti.is_some());
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = generate_access_token(1, &config()).unwrap();
        let other = JwtConfig {
            secret: "different".to_string(),
            ..config()
        };
        let err = validate_token(&token, &other).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature), "got {err:?}");
    }

    #[test]
    fn expired_token_is_rejected() {
        let expired = JwtConfig {
            access_token_expiry_mins: -10,
            ..config()
        };
        let token = generate_access_token(1, &expired).unwrap();
        let err = validate_token(&token, &config()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature), "got {err:?}");
    }

    #[test]
    fn issuer_must_match_when_configured() {
        let identity = JwtConfig {
            issuer: Some("identity".to_string()),
            ..config()
        };
        let impostor = JwtConfig {
            issuer: Some("someone-else".to_string()),
            ..config()
        };

        let token = generate_access_token(7, &identity).unwrap();
        assert_eq!(validate_token(&token, &identity).unwrap().sub, 7);

        let forged = generate_access_token(7, &impostor).unwrap();
        let err = validate_token(&forged, &identity).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidIssuer), "got {err:?}");
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(validate_token("not-a-jwt", &config()).is_err());
    }
}
