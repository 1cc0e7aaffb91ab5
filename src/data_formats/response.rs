use serde::{Deserialize, Serialize};

use crate::models::{Article, Comment, User};

#[derive(Deserialize, Serialize, Debug)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub token: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ArticleResponse {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub subtitle: String,
    pub photo_url: Option<String>,
    pub author_url: Option<String>,
    pub day: String,
    pub body: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleResponse>,
    pub page: i64,
    pub has_more: bool,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleDetailResponse {
    #[serde(flatten)]
    pub article: ArticleResponse,
    pub comments: Vec<CommentResponse>,
    pub like_count: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentResponse {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
    pub body: String,
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LikeResponse {
    pub article_id: i64,
    pub liked: bool,
    pub like_count: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct PageResponse {
    pub page: String,
}

impl UserResponse {
    pub fn new(
        User {
            id,
            name,
            phone_number,
            ..
        }: User,
        token: Option<String>,
    ) -> Self {
        UserResponse {
            id,
            name,
            phone_number,
            token,
        }
    }
}

impl ArticleResponse {
    pub fn new(
        Article {
            id,
            author,
            title,
            subtitle,
            photo_url,
            author_url,
            day,
            body,
        }: Article,
    ) -> Self {
        ArticleResponse {
            id,
            author,
            title,
            subtitle,
            photo_url,
            author_url,
            day: day.to_string(),
            body,
        }
    }
}

impl CommentResponse {
    pub fn new(
        Comment {
            id,
            user_id,
            article_id,
            body,
            created_at,
        }: Comment,
    ) -> Self {
        CommentResponse {
            id,
            user_id,
            article_id,
            body,
            created_at: created_at.to_string(),
        }
    }
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

impl PageResponse {
    pub fn new(page: &str) -> Self {
        PageResponse {
            page: page.to_string(),
        }
    }
}
