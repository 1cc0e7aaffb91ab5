use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ----------------- User Requests -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub phone_number: String,
    pub password: String,
}

// ----------------- Article Requests -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateArticleRequest {
    pub author: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub author_url: Option<String>,
    pub day: NaiveDate,
    pub body: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentRequest {
    pub body: String,
}
