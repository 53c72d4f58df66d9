/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use entity::user::UserRole;
use serde::Serialize;
use std::sync::Arc;
use tracker_core::input::non_empty;
use tracker_core::projects::{NewProject, create_project, delete_project, list_projects};
use tracker_core::types::*;
use uuid::Uuid;

use super::MessageResponse;

#[derive(Serialize, Debug)]
pub struct ProjectsResponse {
    pub message: String,
    pub projects: Vec<MProject>,
}

#[derive(Serialize, Debug)]
pub struct CreatedResponse {
    pub message: String,
    pub id: Uuid,
}

pub async fn get_projects(
    State(state): State<Arc<ServerState>>,
) -> WebResult<Json<ProjectsResponse>> {
    let projects = list_projects(state).await?;

    Ok(Json(ProjectsResponse {
        message: "success".to_string(),
        projects,
    }))
}

pub async fn post_project(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<NewProject>, JsonRejection>,
) -> WebResult<Json<CreatedResponse>> {
    let Json(body) = body?;

    if non_empty(body.name.clone()).is_none() || non_empty(body.key.clone()).is_none() {
        return Err(WebError::missing_fields());
    }

    let project = create_project(state, body).await?;

    Ok(Json(CreatedResponse {
        message: "success".to_string(),
        id: project.id,
    }))
}

pub async fn delete_project_by_id(
    State(state): State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<MessageResponse>> {
    if user.role != UserRole::Tma {
        return Err(WebError::admin_only("delete projects"));
    }

    delete_project(state, id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    Ok(MessageResponse::new("Project removed"))
}
