/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use chrono::Utc;
use entity::user::UserRole;
use password_auth::generate_hash;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracker_core::database::get_user;
use tracker_core::input::non_empty;
use tracker_core::types::*;
use tracker_core::users::{UserChanges, UserWithDue, list_users, update_user};
use uuid::Uuid;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub requester_id: Option<Uuid>,
}

#[derive(Serialize, Debug)]
pub struct UsersResponse {
    pub message: String,
    pub users: Vec<UserWithDue>,
}

#[derive(Serialize, Debug)]
pub struct UserResponse {
    pub message: String,
    pub user: MUser,
}

pub async fn get_users(State(state): State<Arc<ServerState>>) -> WebResult<Json<UsersResponse>> {
    let users = list_users(state, Utc::now()).await?;

    Ok(Json(UsersResponse {
        message: "success".to_string(),
        users,
    }))
}

pub async fn get_user_by_id(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<UserResponse>> {
    let user = get_user(state, id)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    Ok(Json(UserResponse {
        message: "success".to_string(),
        user,
    }))
}

/// Role changes need a requester holding the `TMA` role.
pub async fn put_user(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> WebResult<Json<UserResponse>> {
    let Json(body) = body?;

    let role = match non_empty(body.role) {
        Some(role) => {
            let requester_id = body.requester_id.ok_or_else(|| {
                WebError::Forbidden("Requester ID required for role update".to_string())
            })?;

            let requester = get_user(Arc::clone(&state), requester_id).await?;
            if requester.map(|r| r.role) != Some(UserRole::Tma) {
                return Err(WebError::admin_only("change roles"));
            }

            Some(
                UserRole::try_from_value(&role)
                    .map_err(|_| WebError::invalid_role(&role))?,
            )
        }
        None => None,
    };

    let changes = UserChanges {
        name: non_empty(body.name),
        avatar_url: non_empty(body.avatar_url),
        password_hash: non_empty(body.password).map(|p| generate_hash(p)),
        role,
    };

    let user = update_user(state, id, changes)
        .await?
        .ok_or_else(|| WebError::not_found("User"))?;

    Ok(Json(UserResponse {
        message: "success".to_string(),
        user,
    }))
}
