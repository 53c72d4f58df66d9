/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::encode_jwt;
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use email_address::EmailAddress;
use entity::user::UserRole;
use password_auth::{generate_hash, verify_password};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracker_core::database::get_user_by_email;
use tracker_core::input::non_empty;
use tracker_core::types::*;
use tracker_core::users::{register_user, update_last_login, update_last_logout};
use uuid::Uuid;

use super::MessageResponse;

#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub user_id: Option<Uuid>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_color: String,
    pub avatar_url: Option<String>,
    pub token: String,
}

#[derive(Serialize, Debug)]
pub struct SessionResponse {
    pub message: String,
    pub user: SessionUser,
}

impl SessionResponse {
    fn new(user: MUser, token: String) -> Json<Self> {
        Json(SessionResponse {
            message: "success".to_string(),
            user: SessionUser {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
                avatar_color: user.avatar_color,
                avatar_url: user.avatar_url,
                token,
            },
        })
    }
}

pub async fn post_register(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> WebResult<Json<SessionResponse>> {
    let Json(body) = body?;

    let (Some(email), Some(password)) = (non_empty(body.email), non_empty(body.password)) else {
        return Err(WebError::missing_fields());
    };

    if !EmailAddress::is_valid(&email) {
        return Err(WebError::invalid_email());
    }

    if get_user_by_email(Arc::clone(&state), &email).await?.is_some() {
        return Err(WebError::BadRequest("User already exists".to_string()));
    }

    let user = register_user(
        Arc::clone(&state),
        &email,
        generate_hash(password),
        body.name,
    )
    .await?;

    tracing::info!("Registered user {}", user.id);

    let token = encode_jwt(state, user.id)?;
    Ok(SessionResponse::new(user, token))
}

pub async fn post_login(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> WebResult<Json<SessionResponse>> {
    let Json(body) = body?;

    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(WebError::invalid_credentials());
    };

    let user = get_user_by_email(Arc::clone(&state), &email)
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(password, &user.password).map_err(|_| WebError::invalid_credentials())?;

    let token = encode_jwt(Arc::clone(&state), user.id)?;
    let user = update_last_login(state, user).await?;

    Ok(SessionResponse::new(user, token))
}

pub async fn post_logout(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<LogoutRequest>, JsonRejection>,
) -> WebResult<Json<MessageResponse>> {
    let Json(body) = body?;

    let user_id = body
        .user_id
        .ok_or_else(WebError::missing_user_id)?;

    if !update_last_logout(state, user_id).await? {
        tracing::debug!("Logout for unknown user {}", user_id);
    }

    Ok(MessageResponse::new("success"))
}
