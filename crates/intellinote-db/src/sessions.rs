//! Session token store.
//!
//! Tokens are opaque random strings handed to the client once; only their
//! SHA-256 hash is stored.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{Pool, Postgres, Row};
use tracing::{debug, info};

use intellinote_core::{Error, Result, SessionStore, SessionUser};

/// Prefix identifying IntelliNote session tokens.
pub const TOKEN_PREFIX: &str = "in_sess_";

/// Length of the random part of a token.
const TOKEN_LENGTH: usize = 48;

/// Generate a random session token.
pub(crate) fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    let secret: String = (0..TOKEN_LENGTH)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("{}{}", TOKEN_PREFIX, secret)
}

/// Hash a token using SHA256.
pub(crate) fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// PostgreSQL implementation of SessionStore.
pub struct PgSessionStore {
    pool: Pool<Postgres>,
}

impl PgSessionStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn verify(&self, token: &str) -> Result<Option<SessionUser>> {
        if !token.starts_with(TOKEN_PREFIX) {
            return Ok(None);
        }

        let row = sqlx::query(
            "SELECT s.user_id, u.email FROM session s \
             JOIN app_user u ON u.id = s.user_id \
             WHERE s.token_hash = $1 AND s.expires_at > NOW()",
        )
        .bind(hash_token(token))
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "sessions",
            op = "verify",
            valid = row.is_some(),
            "Session lookup"
        );
        Ok(row.map(|row| SessionUser {
            user_id: row.get("user_id"),
            email: row.get("email"),
        }))
    }

    async fn issue(&self, user: &SessionUser, ttl: Duration) -> Result<String> {
        let token = generate_token();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO session (token_hash, user_id, created_at, expires_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(hash_token(&token))
        .bind(user.user_id)
        .bind(now)
        .bind(now + ttl)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        info!(
            subsystem = "db",
            component = "sessions",
            op = "issue",
            user_id = %user.user_id,
            "Session issued"
        );
        Ok(token)
    }

    async fn revoke(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM session WHERE token_hash = $1")
            .bind(hash_token(token))
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }
}
