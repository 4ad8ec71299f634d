mod board;
mod chat;
mod drawings;
mod images;
mod rooms;
mod utils;

use crate::prelude::*;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Router,
};

const KB: usize = 1024;
const MB: usize = 1024 * KB;

pub fn add_routes(router: Router<AppState>, cfg: &Config) -> Router<AppState> {
    let router = router
        .route("/api/rooms/:room_id/upload", post(images::upload))
        .route_layer(DefaultBodyLimit::max(cfg.max_upload_mb * MB));

    let router = rooms::add_routes(router);
    let router = board::add_routes(router);
    let router = chat::add_routes(router);
    let router = drawings::add_routes(router);

    return router
        .route("/api/images/*path", get(images::fetch))
        .route("/health", get(|| async { StatusCode::NO_CONTENT }));
}
