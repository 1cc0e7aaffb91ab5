use std::sync::Arc;

use crate::db_helpers::{get_user_by_id, session_exists};
use crate::errors::RequestError;
use crate::{models::User, AppContext};
use anyhow::{Context, Result};
use argon2::PasswordVerifier;
use argon2::{password_hash::SaltString, Argon2, PasswordHash};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub const SESSION_EXPIRY_DAYS: i64 = 90;
const SESSION_EXPIRY_DURATION: time::Duration = time::Duration::days(SESSION_EXPIRY_DAYS);

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaim {
    id: i64,
    exp: i64,
}

/// A fully resolved authenticated caller: the session token that was
/// presented plus the user record it maps to.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

pub struct MaybeUser(pub Option<AuthUser>);

impl MaybeUser {
    pub fn require(self) -> Result<AuthUser, RequestError> {
        self.0
            .ok_or(RequestError::NotAuthorized("Need to be authorized"))
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync + 'static,
{
    type Rejection = RequestError;
    async fn from_request_parts(
        parts: &mut Parts,
        _: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<Arc<AppContext>>()
            .cloned()
            .ok_or(RequestError::ServerError)?;

        let header = match parts.headers.get("Authorization") {
            Some(header) => header,
            None => return Ok(MaybeUser(None)),
        };
        let header = header
            .to_str()
            .map_err(|_| RequestError::NotAuthorized("Invalid token"))?;
        let token = header
            .strip_prefix("Token ")
            .ok_or(RequestError::NotAuthorized("Invalid token"))?;

        let id = verify_session_token(&ctx.session_secret, token)?;

        // The token is only half the story: the session row must still be
        // present, otherwise the session was logged out.
        if !session_exists(&ctx.pool, token).await? {
            return Err(RequestError::NotAuthorized("Session is no longer active"));
        }

        let user = get_user_by_id(&ctx.pool, id)
            .await?
            .ok_or(RequestError::NotFound("User no longer exists"))?;

        Ok(MaybeUser(Some(AuthUser {
            user,
            token: token.to_string(),
        })))
    }
}

pub fn issue_session_token(secret: &str, id: i64) -> Result<String> {
    let expiry_date = OffsetDateTime::now_utc() + SESSION_EXPIRY_DURATION;
    let claim = SessionClaim {
        id,
        exp: expiry_date.unix_timestamp(),
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claim,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_ref()),
    )
    .context("Failed to sign session token")
}

pub fn verify_session_token(secret: &str, token: &str) -> Result<i64, RequestError> {
    let token_data = jsonwebtoken::decode::<SessionClaim>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(secret.as_ref()),
        &jsonwebtoken::Validation::default(),
    )
    .map_err(|e| {
        tracing::debug!("Error verifying session token: {}", e);
        RequestError::NotAuthorized("Invalid token")
    })?;
    let claim = token_data.claims;
    if claim.exp < OffsetDateTime::now_utc().unix_timestamp() {
        return Err(RequestError::NotAuthorized("Session expired"));
    }
    Ok(claim.id)
}

pub async fn verify_password_argon2(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        let hash = PasswordHash::new(hash.as_str())
            .map_err(|_| anyhow::anyhow!("Failed to verify password"))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok())
    })
    .await
    .context("Failed to verify password")?
}

pub async fn hash_password_argon2(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(rand::thread_rng());
        let hash = PasswordHash::generate(Argon2::default(), password, salt.as_salt())
            .map_err(|_| anyhow::anyhow!("Failed to hash password"))?;
        Ok(hash.to_string())
    })
    .await
    .context("Failed to hash password")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn password_hash_round_trip() {
        let hash = hash_password_argon2("hunter2".to_string()).await.unwrap();
        assert_ne!(hash, "hunter2");
        assert!(verify_password_argon2("hunter2".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password_argon2("wrong".to_string(), hash)
            .await
            .unwrap());
    }

    #[test]
    fn session_token_round_trip() {
        let token = issue_session_token("test-secret", 42).unwrap();
        assert_eq!(verify_session_token("test-secret", &token).unwrap(), 42);
    }

    #[test]
    fn session_token_rejects_wrong_secret() {
        let token = issue_session_token("test-secret", 42).unwrap();
        assert!(verify_session_token("other-secret", &token).is_err());
    }
}
