mod config;
mod controllers;
mod ids;
mod init;
mod models;
mod prelude;
mod result;
mod storage;

#[cfg(test)]
mod tests;

pub use crate::result::Result;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

use crate::{config::Config, storage::ImageStore};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub db: SqlitePool,
    pub images: Arc<ImageStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = config::build();

    let db = init::db::init_sqlite_pool(&cfg).await?;
    let images = init::storage::init_image_store(&cfg)?;

    let addr: SocketAddr = cfg.bind_addr.parse()?;

    let state = AppState {
        cfg: Arc::new(cfg),
        db,
        images: Arc::new(images),
    };

    let router = build_router(state);

    tracing::info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await?;

    return Ok(());
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new();

    let router = controllers::add_routes(router, &state.cfg);

    // Clients poll from whatever origin served the page.
    return router.with_state(state).layer(CorsLayer::permissive());
}
