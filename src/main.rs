use std::net::SocketAddr;

use kingdom_press::{make_router, run_app, AppContext};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let addr = SocketAddr::from(([127, 0, 0, 1], 3001));
    let ctx = match AppContext::from_env().await {
        Ok(ctx) => ctx,
        Err(error) => {
            tracing::error!("Failed to start: {:#}", error);
            std::process::exit(1);
        }
    };
    let router = make_router();
    tracing::info!("Server started on {}", addr);
    if let Err(error) = run_app(router, ctx, addr).await {
        tracing::error!("Server error: {:#}", error);
    }
}
