mod authentication;
mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
mod models;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use data_formats::*;
use handlers::*;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};

pub type JsonResponse<T> = (StatusCode, Json<T>);

/// Everything a handler needs, built once at startup and passed down through
/// an `Extension` layer. No process-wide singletons.
pub struct AppContext {
    pub pool: SqlitePool,
    pub session_secret: String,
}

impl AppContext {
    pub async fn new(db_url: &str, session_secret: &str) -> Result<Self> {
        let pool = init_db(db_url).await?;
        Ok(AppContext {
            pool,
            session_secret: session_secret.to_owned(),
        })
    }

    pub async fn from_env() -> Result<Self> {
        let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let session_secret =
            std::env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?;
        AppContext::new(&db_url, &session_secret).await
    }
}

pub async fn run_app(app: Router, ctx: AppContext, address: SocketAddr) -> Result<()> {
    let app = app.layer(Extension(Arc::new(ctx)));
    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(db_url: &str) -> Result<SqlitePool> {
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(db_url)
            .await
            .context("Failed to create database")?;
    }
    let pool = SqlitePool::connect(db_url).await?;
    // Versioned, create-if-absent migrations; existing data is never dropped.
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations completed");
    Ok(pool)
}

pub fn get_random_free_port() -> (u16, SocketAddr) {
    let listener = TcpListener::bind("localhost:0").unwrap();
    match listener.local_addr() {
        Ok(addr) => (addr.port(), addr),
        Err(_) => panic!("Could not get a free port"),
    }
}

pub fn make_router() -> Router {
    Router::new()
        .route("/check_health", get(alive))
        .route("/", get(home))
        .route("/bulls", get(bulls))
        .route("/podcasts", get(podcasts))
        .route("/kingdom_videos", get(kingdom_videos))
        .route("/anointing_streams", get(anointing_streams))
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/logout", post(logout_user))
        .route("/create_article", post(create_article))
        .route("/all_articles", get(all_articles))
        .route("/article/:article_id", get(single_article))
        .route("/article/:article_id/comments", post(add_comment))
        .route("/article/:article_id/like", post(toggle_like))
        .fallback(not_found)
}
