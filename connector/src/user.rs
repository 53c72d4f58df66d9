/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type User = entity::user::Model;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserWithDue {
    #[serde(flatten)]
    pub user: User,
    pub due_count: i64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UsersResponse {
    pub message: String,
    pub users: Vec<UserWithDue>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub message: String,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<Uuid>,
}

pub async fn get_users(config: &RequestConfig) -> ConnectorResult<UsersResponse> {
    let res = get_client(config, "users", RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_user(config: &RequestConfig, id: Uuid) -> ConnectorResult<UserResponse> {
    let res = get_client(config, &format!("users/{}", id), RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn put_user(
    config: &RequestConfig,
    id: Uuid,
    changes: &PatchUserRequest,
) -> ConnectorResult<UserResponse> {
    let res = get_client(config, &format!("users/{}", id), RequestType::PUT, true)?
        .json(changes)
        .send()
        .await?;

    parse_response(res).await
}
