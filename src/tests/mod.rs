mod rooms;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{build_router, config, storage::ImageStore, AppState};

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
    // Holds the image directory open for the lifetime of the test.
    _images: TempDir,
}

pub async fn test_app() -> TestApp {
    // A single pinned connection keeps every query on the same in-memory
    // database.
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!().run(&db).await.unwrap();

    let images = tempfile::tempdir().unwrap();

    let state = AppState {
        cfg: Arc::new(config::build()),
        db: db.clone(),
        images: Arc::new(ImageStore::local(images.path().to_path_buf())),
    };

    return TestApp {
        router: build_router(state),
        db,
        _images: images,
    };
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        return self.router.clone().oneshot(request).await.unwrap();
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&body).unwrap())
            }
            None => Body::empty(),
        };

        let response = self.send(builder.body(body).unwrap()).await;
        let status = response.status();

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        return (status, value);
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        return self.request(Method::GET, uri, None).await;
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        return self.request(Method::POST, uri, Some(body)).await;
    }

    pub async fn delete(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        return self.request(Method::DELETE, uri, body).await;
    }

    /// Creates a room and returns its code.
    pub async fn create_room(&self, body: Value) -> String {
        let (status, created) = self.post("/api/rooms", body).await;
        assert_eq!(status, StatusCode::OK);

        return created["room_id"].as_str().unwrap().to_string();
    }
}
