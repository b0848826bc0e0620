//! Token service
//!
//! Issues and validates the signed, time-limited access and refresh tokens.
//! Both token kinds are HMAC-signed (HS256) with a shared secret and carry
//! audience and issuer claims; access tokens additionally carry the
//! caller's username and role.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::JwtConfig,
    error::{AppError, AppResult},
    models::UserRole,
};

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Claims carried by an access token
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Username
    pub username: String,
    /// User role
    pub role: UserRole,
    /// Unique token ID
    pub jti: Uuid,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Audience
    pub aud: String,
    /// Issuer
    pub iss: String,
    /// Token kind discriminator
    pub token_type: String,
}

/// Claims carried by a refresh token. Deliberately role-free: the role is
/// re-read from the credential store when the token is exchanged.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Unique token ID
    pub jti: Uuid,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Audience
    pub aud: String,
    /// Issuer
    pub iss: String,
    /// Token kind discriminator
    pub token_type: String,
}

/// Issues and validates access/refresh token pairs
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    access_expiry: Duration,
    refresh_expiry: Duration,
}

impl TokenService {
    /// Create a token service from JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            access_expiry: Duration::minutes(config.access_expiry_minutes),
            refresh_expiry: Duration::hours(config.refresh_expiry_hours),
        }
    }

    /// Issue a short-lived access token carrying identity and role
    pub fn issue_access_token(
        &self,
        user_id: Uuid,
        username: &str,
        role: UserRole,
    ) -> AppResult<String> {
        let now = Utc::now();
        let claims = AccessTokenClaims {
            sub: user_id,
            username: username.to_string(),
            role,
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + self.access_expiry).timestamp(),
            aud: self.audience.clone(),
            iss: self.issuer.clone(),
            token_type: TOKEN_TYPE_ACCESS.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
    }

    /// Issue a longer-lived refresh token carrying identity only
    pub fn issue_refresh_token(&self, user_id: Uuid) -> AppResult<String> {
        let now = Utc::now();
        let claims = RefreshTokenClaims {
            sub: user_id,
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + self.refresh_expiry).timestamp(),
            aud: self.audience.clone(),
            iss: self.issuer.clone(),
            token_type: TOKEN_TYPE_REFRESH.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
    }

    /// Verify and decode an access token (signature, audience, issuer, expiry)
    pub fn decode_access_token(&self, token: &str) -> AppResult<AccessTokenClaims> {
        let token_data = decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation())?;

        if token_data.claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(AppError::InvalidToken);
        }

        Ok(token_data.claims)
    }

    /// Verify and decode a refresh token.
    ///
    /// Returns the decoded claims or `None`; decoding failures never reach
    /// the caller as errors.
    pub fn validate_refresh_token(&self, token: &str) -> Option<RefreshTokenClaims> {
        let token_data =
            decode::<RefreshTokenClaims>(token, &self.decoding_key, &self.validation()).ok()?;

        if token_data.claims.token_type != TOKEN_TYPE_REFRESH {
            return None;
        }

        Some(token_data.claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::default();
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            issuer: "tablebook-api".to_string(),
            audience: "tablebook-client".to_string(),
            access_expiry_minutes: 10,
            refresh_expiry_hours: 24,
        }
    }

    fn service() -> TokenService {
        TokenService::new(&jwt_config("unit-test-secret"))
    }

    #[test]
    fn test_access_token_round_trip() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        let token = tokens
            .issue_access_token(user_id, "maria", UserRole::RestaurantManager)
            .unwrap();
        let claims = tokens.decode_access_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "maria");
        assert_eq!(claims.role, UserRole::RestaurantManager);
        assert_eq!(claims.aud, "tablebook-client");
        assert_eq!(claims.iss, "tablebook-api");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        let token = tokens.issue_refresh_token(user_id).unwrap();
        let claims = tokens.validate_refresh_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_unique_token_ids() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        let a = tokens.issue_refresh_token(user_id).unwrap();
        let b = tokens.issue_refresh_token(user_id).unwrap();
        assert_ne!(
            tokens.validate_refresh_token(&a).unwrap().jti,
            tokens.validate_refresh_token(&b).unwrap().jti
        );
    }

    #[test]
    fn test_access_token_is_not_a_refresh_token() {
        let tokens = service();
        let token = tokens
            .issue_access_token(Uuid::new_v4(), "maria", UserRole::RegisteredUser)
            .unwrap();
        assert!(tokens.validate_refresh_token(&token).is_none());
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let tokens = service();
        let other = TokenService::new(&jwt_config("a-different-secret"));

        let token = other.issue_refresh_token(Uuid::new_v4()).unwrap();
        assert!(tokens.validate_refresh_token(&token).is_none());
    }

    #[test]
    fn test_wrong_audience_is_rejected() {
        let tokens = service();
        let mut config = jwt_config("unit-test-secret");
        config.audience = "some-other-client".to_string();
        let other = TokenService::new(&config);

        let token = other.issue_refresh_token(Uuid::new_v4()).unwrap();
        assert!(tokens.validate_refresh_token(&token).is_none());
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let tokens = service();
        let mut config = jwt_config("unit-test-secret");
        config.issuer = "someone-else".to_string();
        let other = TokenService::new(&config);

        let token = other.issue_refresh_token(Uuid::new_v4()).unwrap();
        assert!(tokens.validate_refresh_token(&token).is_none());
    }

    #[test]
    fn test_expired_refresh_token_is_rejected() {
        let tokens = service();
        let now = Utc::now();
        let claims = RefreshTokenClaims {
            sub: Uuid::new_v4(),
            jti: Uuid::new_v4(),
            iat: (now - Duration::hours(25)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            aud: "tablebook-client".to_string(),
            iss: "tablebook-api".to_string(),
            token_type: "refresh".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        assert!(tokens.validate_refresh_token(&token).is_none());
    }

    #[test]
    fn test_expired_access_token_is_rejected() {
        let tokens = service();
        let now = Utc::now();
        let claims = AccessTokenClaims {
            sub: Uuid::new_v4(),
            username: "maria".to_string(),
            role: UserRole::RegisteredUser,
            jti: Uuid::new_v4(),
            iat: (now - Duration::minutes(30)).timestamp(),
            exp: (now - Duration::minutes(20)).timestamp(),
            aud: "tablebook-client".to_string(),
            iss: "tablebook-api".to_string(),
            token_type: "access".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        match tokens.decode_access_token(&token) {
            Err(AppError::TokenExpired) => {}
            other => panic!("expected TokenExpired, got {:?}", other.map(|_| ())),
        }
    }
}
