/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Debug)]
struct MakeUserRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Debug)]
struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MakeLogoutRequest {
    pub user_id: Uuid,
}

/// The signed-in user as returned by register and login, including the
/// bearer token for later requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
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

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionResponse {
    pub message: String,
    pub user: SessionUser,
}

pub async fn post_register(
    config: &RequestConfig,
    email: String,
    password: String,
    name: Option<String>,
) -> ConnectorResult<SessionResponse> {
    let req = MakeUserRequest {
        email,
        password,
        name,
    };

    let res = get_client(config, "register", RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_login(
    config: &RequestConfig,
    email: String,
    password: String,
) -> ConnectorResult<SessionResponse> {
    let req = MakeLoginRequest { email, password };

    let res = get_client(config, "login", RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_logout(config: &RequestConfig, user_id: Uuid) -> ConnectorResult<MessageResponse> {
    let req = MakeLogoutRequest { user_id };

    let res = get_client(config, "logout", RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}
