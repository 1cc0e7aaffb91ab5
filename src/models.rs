use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub phone_number: String,
    pub name: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub subtitle: String,
    pub photo_url: Option<String>,
    pub author_url: Option<String>,
    pub day: NaiveDate,
    pub body: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
    pub body: String,
    pub created_at: NaiveDateTime,
}
