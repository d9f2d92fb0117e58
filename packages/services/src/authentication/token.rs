use super::claims::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

#[derive(Debug)]
pub enum TokenError {
    /// Signing or verification failed, including expiry.
    Jwt(jsonwebtoken::errors::Error),
    /// The token verified but its subject is not a user id.
    InvalidSubject(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        TokenError::Jwt(e)
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Jwt(e) => write!(f, "session token rejected: {}", e),
            TokenError::InvalidSubject(sub) => write!(f, "session token subject is not a user id: {}", sub),
        }
    }
}

impl std::error::Error for TokenError {}

/// What a verified session token names: the user and the server-side
/// session it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_id: i32,
    pub session_id: String,
}

/// Issues and verifies the signed session tokens that carry the id of the
/// logged-in user.
#[derive(Clone)]
pub struct SessionKeys {
    secret: String,
    lifetime_seconds: i64,
}

impl SessionKeys {
    pub fn new(secret: impl Into<String>, lifetime_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            lifetime_seconds,
        }
    }

    pub fn lifetime_seconds(&self) -> i64 {
        self.lifetime_seconds
    }

    /// Signs a token for `user_id`; `session_id` becomes the `jti` claim.
    pub fn issue(&self, user_id: i32, session_id: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(self.lifetime_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: session_id.to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    /// Returns the user and session the token was issued for. The caller
    /// still has to check that the session is live.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        let user_id = data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|_| TokenError::InvalidSubject(data.claims.sub.clone()))?;
        Ok(SessionClaims {
            user_id,
            session_id: data.claims.jti,
        })
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("lifetime_seconds", &self.lifetime_seconds)
            .finish_non_exhaustive()
    }
}
