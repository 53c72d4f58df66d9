/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};

#[tokio::test]
async fn test_missing_authorization_header() {
    let state = common::create_mock_state(common::empty_db());
    let req = Request::builder()
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();

    let (status, body) = common::send(state, req).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Authorization header not found");
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let state = common::create_mock_state(common::empty_db());
    let req = Request::builder()
        .uri("/api/tasks")
        .header("authorization", "Basic abc")
        .body(Body::empty())
        .unwrap();

    let (status, _) = common::send(state, req).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_token() {
    let state = common::create_mock_state(common::empty_db());
    let req = Request::builder()
        .uri("/api/notifications")
        .header("authorization", "Bearer not-a-token")
        .body(Body::empty())
        .unwrap();

    let (status, body) = common::send(state, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unable to decode token");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let state = common::create_mock_state(common::empty_db());
    let req = common::json_request(
        "POST",
        "/api/register",
        serde_json::json!({"email": "alice@example.com"}),
    );

    let (status, body) = common::send(state, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing fields");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let state = common::create_mock_state(common::empty_db());
    let req = common::json_request(
        "POST",
        "/api/register",
        serde_json::json!({"email": "not-an-email", "password": "secret"}),
    );

    let (status, body) = common::send(state, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid Email");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let state = common::create_mock_state(common::empty_db());
    let req = common::json_request("POST", "/api/login", serde_json::json!({}));

    let (status, _) = common::send(state, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_requires_user_id() {
    let state = common::create_mock_state(common::empty_db());
    let req = common::json_request("POST", "/api/logout", serde_json::json!({}));

    let (status, body) = common::send(state, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing userId");
}

#[tokio::test]
async fn test_invalid_json_body() {
    let state = common::create_mock_state(common::empty_db());
    let req = Request::builder()
        .method("POST")
        .uri("/api/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = common::send(state, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], true);
}
