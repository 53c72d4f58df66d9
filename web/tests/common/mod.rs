/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use entity::user::UserRole;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use tower::ServiceExt;
use tracker_core::types::*;
use uuid::Uuid;

pub fn jwt_secret_file() -> String {
    let path = std::env::temp_dir().join("tracker-web-tests-jwt");
    std::fs::write(&path, "test-jwt-secret").unwrap();
    path.to_string_lossy().to_string()
}

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3001,
        serve_url: "http://localhost:5173".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: jwt_secret_file(),
        token_expiry_days: 30,
        seed: false,
        admin_email: None,
        admin_name: "Administrator".to_string(),
        admin_password_file: None,
        sentry_dsn: None,
    }
}

pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn create_mock_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
    })
}

pub fn user(role: UserRole) -> MUser {
    MUser {
        id: Uuid::now_v7(),
        email: "dev@example.com".to_string(),
        password: "hashed".to_string(),
        name: "Dev".to_string(),
        avatar_color: "#0052cc".to_string(),
        avatar_url: None,
        role,
        last_login: None,
        last_logout: None,
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(state: Arc<ServerState>, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let app = web::create_router(state).unwrap();
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, body)
}
