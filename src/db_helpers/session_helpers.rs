use sqlx::SqlitePool;

use crate::{authentication::SESSION_EXPIRY_DAYS, errors::RequestError};

pub async fn insert_session(
    pool: &SqlitePool,
    token: &str,
    user_id: i64,
) -> Result<(), RequestError> {
    let mut tx = pool.begin().await?;
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(token)
        .bind(user_id)
        .execute(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

pub async fn session_exists(pool: &SqlitePool, token: &str) -> Result<bool, RequestError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions WHERE token = $1")
        .bind(token)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Rows older than the token expiry can never verify again; each login
/// sweeps them out so the sessions table does not grow without bound.
pub async fn purge_expired_sessions(pool: &SqlitePool) -> Result<(), RequestError> {
    let cutoff = format!("-{} days", SESSION_EXPIRY_DAYS);
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM sessions WHERE created_at < datetime('now', $1)")
        .bind(cutoff)
        .execute(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(())
}

/// Deleting a session that is already gone is a no-op; logout is idempotent.
pub async fn delete_session(pool: &SqlitePool, token: &str) -> Result<(), RequestError> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(())
}
