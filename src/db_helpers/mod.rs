use sqlx::SqlitePool;

use crate::{
    errors::RequestError,
    models::{Article, User},
};

mod article_helpers;
mod comment_helpers;
mod like_helpers;
mod session_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use like_helpers::*;
pub use session_helpers::*;
pub use user_helpers::*;

// ----------------- Shared Lookups -----------------

pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, RequestError> {
    let result = sqlx::query_as::<_, User>(
        "SELECT id, phone_number, name, password, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}

pub async fn get_user_by_phone(
    pool: &SqlitePool,
    phone_number: &str,
) -> Result<Option<User>, RequestError> {
    let result = sqlx::query_as::<_, User>(
        "SELECT id, phone_number, name, password, created_at FROM users WHERE phone_number = $1",
    )
    .bind(phone_number)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}

pub async fn get_article_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Article>, RequestError> {
    let result = sqlx::query_as::<_, Article>(
        "SELECT id, author, title, subtitle, photo_url, author_url, day, body \
         FROM articles WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}
