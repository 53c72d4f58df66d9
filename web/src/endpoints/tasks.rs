/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracker_core::database::{get_project, get_task_by_key};
use tracker_core::input::non_empty;
use tracker_core::tasks::{
    NewTask, TaskFilter, TaskPatch, create_task, delete_task, list_tasks, update_task,
};
use tracker_core::types::*;
use uuid::Uuid;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskQuery {
    pub deleted_by: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct TasksResponse {
    pub message: String,
    pub tasks: Vec<MTask>,
}

#[derive(Serialize, Debug)]
pub struct TaskCreatedResponse {
    pub message: String,
    pub id: Uuid,
    pub key: String,
}

#[derive(Serialize, Debug)]
pub struct ChangesResponse {
    pub message: String,
    pub changes: u64,
}

pub async fn get_tasks(
    State(state): State<Arc<ServerState>>,
    Query(filter): Query<TaskFilter>,
) -> WebResult<Json<TasksResponse>> {
    let tasks = list_tasks(state, &filter).await?;

    Ok(Json(TasksResponse {
        message: "success".to_string(),
        tasks,
    }))
}

pub async fn post_task(
    State(state): State<Arc<ServerState>>,
    body: Result<Json<NewTask>, JsonRejection>,
) -> WebResult<Json<TaskCreatedResponse>> {
    let Json(body) = body?;

    let project_id = match (non_empty(body.title.clone()), body.project_id) {
        (Some(_), Some(project_id)) => project_id,
        _ => return Err(WebError::missing_fields()),
    };

    let project = get_project(Arc::clone(&state), project_id)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    if let Some(key) = non_empty(body.key.clone()) {
        if get_task_by_key(Arc::clone(&state), &key).await?.is_some() {
            return Err(WebError::already_exists("Task key"));
        }
    }

    let task = create_task(state, &project, body).await?;

    Ok(Json(TaskCreatedResponse {
        message: "success".to_string(),
        id: task.id,
        key: task.key,
    }))
}

pub async fn put_task(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> WebResult<Json<ChangesResponse>> {
    let Json(patch) = body?;

    if let Some(key) = non_empty(patch.key.clone()) {
        let existing = get_task_by_key(Arc::clone(&state), &key).await?;

        if existing.is_some_and(|t| t.id != id) {
            return Err(WebError::already_exists("Task key"));
        }
    }

    let update = update_task(state, id, patch)
        .await?
        .ok_or_else(|| WebError::not_found("Task"))?;

    tracing::debug!(
        "Updated task {} with {} notifications",
        update.task.key,
        update.notices.len()
    );

    Ok(Json(ChangesResponse {
        message: "success".to_string(),
        changes: 1,
    }))
}

pub async fn delete_task_by_id(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteTaskQuery>,
) -> WebResult<Json<ChangesResponse>> {
    delete_task(state, id, query.deleted_by)
        .await?
        .ok_or_else(|| WebError::not_found("Task"))?;

    Ok(Json(ChangesResponse {
        message: "deleted".to_string(),
        changes: 1,
    }))
}
