use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserId;

/// Errors from token issuing and validation
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("token subject is not a user id: {0}")]
    MalformedSubject(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and validates the HS256 tokens handed out by `/login`.
///
/// The subject claim carries the user id; expiry is enforced on every
/// validation. The signing secret comes from configuration and never
/// changes after startup.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    /// Issue a token whose subject is `user_id`.
    pub fn issue(&self, user_id: UserId) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Validate signature and expiry, returning the subject user id.
    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;
        data.claims
            .sub
            .parse()
            .map_err(|_| AuthError::MalformedSubject(data.claims.sub))
    }
}
