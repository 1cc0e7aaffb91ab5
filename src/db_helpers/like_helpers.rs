use sqlx::SqlitePool;

use crate::errors::RequestError;

/// Creates the like if the caller has not liked the article yet, otherwise
/// removes it. Returns whether the article ends up liked by the caller.
/// The insert claims the UNIQUE (user_id, article_id) slot up front, so a
/// concurrent toggle that loses the race falls through to the delete branch
/// instead of erroring on the constraint.
pub async fn toggle_like_in_db(
    pool: &SqlitePool,
    user_id: i64,
    article_id: i64,
) -> Result<bool, RequestError> {
    let mut tx = pool.begin().await?;
    let inserted = sqlx::query(
        "INSERT INTO likes (user_id, article_id) VALUES ($1, $2) \
         ON CONFLICT (user_id, article_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(article_id)
    .execute(&mut tx)
    .await?;

    let liked = if inserted.rows_affected() == 1 {
        true
    } else {
        sqlx::query("DELETE FROM likes WHERE user_id = $1 AND article_id = $2")
            .bind(user_id)
            .bind(article_id)
            .execute(&mut tx)
            .await?;
        false
    };
    tx.commit().await?;
    Ok(liked)
}

pub async fn count_likes_for_article(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<i64, RequestError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE article_id = $1")
        .bind(article_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
