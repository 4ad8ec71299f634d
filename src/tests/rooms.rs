use super::*;

use chrono::{Duration, Utc};

#[tokio::test]
async fn create_room_without_password_is_open() {
    let app = test_app().await;

    let (status, created) = app
        .post(
            "/api/rooms",
            json!({ "name": "Physics 101", "creator_name": "lecturer" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Physics 101");
    assert_eq!(created["creator_name"], "lecturer");
    assert_eq!(created["has_password"], false);

    let room_id = created["room_id"].as_str().unwrap();
    assert_eq!(room_id.len(), 6);

    // Any candidate passes the gate on an unprotected room.
    let (status, verified) = app
        .post(
            &format!("/api/rooms/{room_id}/verify"),
            json!({ "password": "whatever" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["valid"], true);
}

#[tokio::test]
async fn create_room_defaults_blank_fields() {
    let app = test_app().await;

    let (_, created) = app.post("/api/rooms", json!({ "name": "  " })).await;

    assert_eq!(created["name"], "Untitled board");
    assert_eq!(created["creator_name"], "anonymous");
}

#[tokio::test]
async fn verify_checks_the_stored_password() {
    let app = test_app().await;
    let room_id = app
        .create_room(json!({ "name": "secret", "password": "abc" }))
        .await;

    let (_, verified) = app
        .post(
            &format!("/api/rooms/{room_id}/verify"),
            json!({ "password": "abc" }),
        )
        .await;
    assert_eq!(verified["valid"], true);

    let (_, verified) = app
        .post(
            &format!("/api/rooms/{room_id}/verify"),
            json!({ "password": "xyz" }),
        )
        .await;
    assert_eq!(verified["valid"], false);
}

#[tokio::test]
async fn passwords_are_stored_hashed() {
    let app = test_app().await;
    let room_id = app.create_room(json!({ "password": "abc" })).await;

    let stored: String =
        sqlx::query_scalar("SELECT password FROM room_settings WHERE room_id = ?")
            .bind(&room_id)
            .fetch_one(&app.db)
            .await
            .unwrap();

    assert_ne!(stored, "abc");
    assert!(stored.starts_with("$argon2"));
}

#[tokio::test]
async fn get_room_reports_flags() {
    let app = test_app().await;
    let room_id = app
        .create_room(json!({ "name": "flagged", "password": "abc" }))
        .await;

    let (status, room) = app.get(&format!("/api/rooms/{room_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(room["id"], room_id.as_str());
    assert_eq!(room["name"], "flagged");
    assert_eq!(room["has_password"], true);
    assert_eq!(room["is_active"], true);
    assert!(room["created_at"].is_string());
    assert!(room["last_activity"].is_string());
}

#[tokio::test]
async fn get_unknown_room_is_not_found() {
    let app = test_app().await;

    let (status, body) = app.get("/api/rooms/ZZZZZZ").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn room_goes_inactive_once_expired() {
    let app = test_app().await;
    let room_id = app.create_room(json!({ "name": "expiring" })).await;

    sqlx::query(
        "INSERT INTO room_settings (room_id, password, expires_at, is_active) VALUES (?, NULL, ?, 1)",
    )
    .bind(&room_id)
    .bind(Utc::now() - Duration::hours(1))
    .execute(&app.db)
    .await
    .unwrap();

    let (_, room) = app.get(&format!("/api/rooms/{room_id}")).await;

    assert_eq!(room["has_password"], false);
    assert_eq!(room["is_active"], false);
}

#[tokio::test]
async fn delete_requires_the_password() {
    let app = test_app().await;
    let room_id = app.create_room(json!({ "password": "abc" })).await;

    let (status, body) = app
        .delete(
            &format!("/api/rooms/{room_id}"),
            Some(json!({ "password": "wrong" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].is_string());

    // Still there.
    let (status, _) = app.get(&format!("/api/rooms/{room_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .delete(
            &format!("/api/rooms/{room_id}"),
            Some(json!({ "password": "abc" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn delete_cascades_to_all_room_content() {
    let app = test_app().await;
    let room_id = app.create_room(json!({ "name": "doomed" })).await;

    app.post(
        &format!("/api/rooms/{room_id}/board"),
        json!({ "type": "text", "content": "hello" }),
    )
    .await;
    app.post(
        &format!("/api/rooms/{room_id}/chat"),
        json!({ "message": "hi" }),
    )
    .await;
    app.post(
        &format!("/api/rooms/{room_id}/drawings"),
        json!({ "drawing_data": "[]" }),
    )
    .await;

    let (status, _) = app.delete(&format!("/api/rooms/{room_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/api/rooms/{room_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, board) = app.get(&format!("/api/rooms/{room_id}/board")).await;
    assert_eq!(board["items"], json!([]));

    let (_, chat) = app.get(&format!("/api/rooms/{room_id}/chat")).await;
    assert_eq!(chat["messages"], json!([]));

    let (_, drawings) = app.get(&format!("/api/rooms/{room_id}/drawings")).await;
    assert_eq!(drawings["drawings"], json!([]));

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM board_items WHERE room_id = ?")
        .bind(&room_id)
        .fetch_one(&app.db)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn deleting_an_absent_room_succeeds() {
    let app = test_app().await;

    let (status, body) = app.delete("/api/rooms/ZZZZZZ", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn verify_on_an_absent_room_is_valid() {
    let app = test_app().await;

    let (_, verified) = app
        .post("/api/rooms/ZZZZZZ/verify", json!({ "password": "x" }))
        .await;

    assert_eq!(verified["valid"], true);
}
