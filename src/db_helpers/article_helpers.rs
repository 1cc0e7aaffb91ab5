use sqlx::SqlitePool;

use crate::{
    data_formats::{CreateArticleRequest, ARTICLES_PER_PAGE},
    errors::RequestError,
    models::Article,
};

pub async fn insert_article(
    pool: &SqlitePool,
    request: &CreateArticleRequest,
) -> Result<Article, RequestError> {
    let mut tx = pool.begin().await?;
    let article = sqlx::query_as::<_, Article>(
        "INSERT INTO articles (author, title, subtitle, photo_url, author_url, day, body) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING id, author, title, subtitle, photo_url, author_url, day, body",
    )
    .bind(&request.author)
    .bind(&request.title)
    .bind(&request.subtitle)
    .bind(&request.photo_url)
    .bind(&request.author_url)
    .bind(request.day)
    .bind(&request.body)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(article)
}

/// Fetches the `page`-th slice of articles, most recent publication date
/// first, plus whether more pages follow. Pages are 1-based; a page past the
/// end comes back as an empty slice rather than an error.
pub async fn list_articles_page(
    pool: &SqlitePool,
    page: i64,
) -> Result<(Vec<Article>, bool), RequestError> {
    // The page number comes straight off the query string; saturate so an
    // absurdly large value reads as an empty page instead of overflowing.
    let offset = page.saturating_sub(1).saturating_mul(ARTICLES_PER_PAGE);
    let articles = sqlx::query_as::<_, Article>(
        "SELECT id, author, title, subtitle, photo_url, author_url, day, body \
         FROM articles ORDER BY day DESC LIMIT $1 OFFSET $2",
    )
    .bind(ARTICLES_PER_PAGE)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
        .fetch_one(pool)
        .await?;
    let has_more = total > offset.saturating_add(ARTICLES_PER_PAGE);

    Ok((articles, has_more))
}
