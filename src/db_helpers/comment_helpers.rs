use sqlx::SqlitePool;

use crate::{errors::RequestError, models::Comment};

pub async fn insert_comment(
    pool: &SqlitePool,
    user_id: i64,
    article_id: i64,
    body: &str,
) -> Result<Comment, RequestError> {
    let mut tx = pool.begin().await?;
    let comment = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (user_id, article_id, body) \
         VALUES ($1, $2, $3) \
         RETURNING id, user_id, article_id, body, created_at",
    )
    .bind(user_id)
    .bind(article_id)
    .bind(body)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(comment)
}

pub async fn get_comments_for_article(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Vec<Comment>, RequestError> {
    let comments = sqlx::query_as::<_, Comment>(
        "SELECT id, user_id, article_id, body, created_at \
         FROM comments WHERE article_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(article_id)
    .fetch_all(pool)
    .await?;
    Ok(comments)
}
