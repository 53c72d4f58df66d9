/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use entity::user::UserRole;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::database::get_user;
use super::input::{email_local_part, random_avatar_color};
use super::messages::iso_now;
use super::overdue::overdue_condition;
use super::types::*;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithDue {
    #[serde(flatten)]
    pub user: MUser,
    pub due_count: i64,
}

#[derive(Debug, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<UserRole>,
}

/// Users ordered by name, each with the number of overdue tasks assigned
/// to them.
pub async fn list_users(state: Arc<ServerState>, now: DateTime<Utc>) -> Result<Vec<UserWithDue>> {
    let users = EUser::find()
        .order_by_asc(CUser::Name)
        .all(&state.db)
        .await
        .context("Failed to query users")?;

    let due_counts = ETask::find()
        .select_only()
        .column(CTask::AssigneeId)
        .column_as(Expr::col(CTask::Id).count(), "due_count")
        .filter(overdue_condition(now))
        .filter(CTask::AssigneeId.is_not_null())
        .group_by(CTask::AssigneeId)
        .into_tuple::<(Uuid, i64)>()
        .all(&state.db)
        .await
        .context("Failed to count overdue tasks")?
        .into_iter()
        .collect::<HashMap<Uuid, i64>>();

    Ok(users
        .into_iter()
        .map(|user| UserWithDue {
            due_count: due_counts.get(&user.id).copied().unwrap_or(0),
            user,
        })
        .collect())
}

/// Creates a user with a random avatar color. The name falls back to the
/// local part of the email address.
pub async fn register_user(
    state: Arc<ServerState>,
    email: &str,
    password_hash: String,
    name: Option<String>,
) -> Result<MUser> {
    let name = name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| email_local_part(email).to_string());

    AUser {
        id: Set(Uuid::now_v7()),
        email: Set(email.to_string()),
        password: Set(password_hash),
        name: Set(name),
        avatar_color: Set(random_avatar_color()),
        avatar_url: Set(None),
        role: Set(UserRole::User),
        last_login: Set(Some(iso_now())),
        last_logout: Set(None),
    }
    .insert(&state.db)
    .await
    .context("Failed to create user")
}

pub async fn update_last_login(state: Arc<ServerState>, user: MUser) -> Result<MUser> {
    let mut auser: AUser = user.into();

    auser.last_login = Set(Some(iso_now()));
    auser
        .update(&state.db)
        .await
        .context("Failed to update user last login")
}

/// Returns `false` when the user does not exist.
pub async fn update_last_logout(state: Arc<ServerState>, id: Uuid) -> Result<bool> {
    let Some(user) = get_user(Arc::clone(&state), id).await? else {
        return Ok(false);
    };

    let mut auser: AUser = user.into();

    auser.last_logout = Set(Some(iso_now()));
    auser
        .update(&state.db)
        .await
        .context("Failed to update user last logout")?;

    Ok(true)
}

pub async fn update_user(
    state: Arc<ServerState>,
    id: Uuid,
    changes: UserChanges,
) -> Result<Option<MUser>> {
    let Some(user) = get_user(Arc::clone(&state), id).await? else {
        return Ok(None);
    };

    let mut auser: AUser = user.into();

    if let Some(name) = changes.name {
        auser.name = Set(name);
    }
    if let Some(avatar_url) = changes.avatar_url {
        auser.avatar_url = Set(Some(avatar_url));
    }
    if let Some(password_hash) = changes.password_hash {
        auser.password = Set(password_hash);
    }
    if let Some(role) = changes.role {
        auser.role = Set(role);
    }

    let user = auser
        .update(&state.db)
        .await
        .context("Failed to update user")?;

    Ok(Some(user))
}
