use sqlx::SqlitePool;

use crate::{errors::RequestError, models::User};

pub async fn insert_user(
    pool: &SqlitePool,
    name: &str,
    phone_number: &str,
    password_hash: &str,
) -> Result<User, RequestError> {
    let mut tx = pool.begin().await?;
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (phone_number, name, password) \
         VALUES ($1, $2, $3) \
         RETURNING id, phone_number, name, password, created_at",
    )
    .bind(phone_number)
    .bind(name)
    .bind(password_hash)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(user)
}
