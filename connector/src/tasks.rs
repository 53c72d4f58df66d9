/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::task::{Issue, Issues, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};
use std::future::Future;
use uuid::Uuid;

pub type Task = entity::task::Model;

#[derive(Serialize, Deserialize, Debug)]
pub struct TasksResponse {
    pub message: String,
    pub tasks: Vec<Task>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskCreated {
    pub message: String,
    pub id: Uuid,
    pub key: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChangesResponse {
    pub message: String,
    pub changes: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MakeTaskRequest {
    pub key: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub assignee: String,
    pub reporter: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub resolution: String,
    pub created: String,
    pub updated: String,
    pub start_date: String,
    pub due_date: Option<String>,
    pub parent_id: Option<Uuid>,
    pub expanded: i16,
    pub project_id: Uuid,
}

/// Partial task update. Absent fields are left untouched on the server
/// and in the local list.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<Issue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_id: Option<Uuid>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        TaskPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn with_actor(mut self, name: &str, id: Option<Uuid>) -> Self {
        self.modified_by = Some(name.to_string());
        self.modifier_id = id;
        self
    }

    pub fn apply(&self, task: &mut Task) {
        if let Some(key) = &self.key {
            task.key = key.clone();
        }
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(assignee) = &self.assignee {
            task.assignee = assignee.clone();
        }
        if let Some(reporter) = &self.reporter {
            task.reporter = Some(reporter.clone());
        }
        if let Some(priority) = &self.priority {
            task.priority = priority.clone();
        }
        if let Some(status) = &self.status {
            task.status = status.clone();
        }
        if let Some(resolution) = &self.resolution {
            task.resolution = resolution.clone();
        }
        if let Some(updated) = &self.updated {
            task.updated = Some(updated.clone());
        }
        if let Some(start_date) = &self.start_date {
            task.start_date = Some(start_date.clone());
        }
        if let Some(due_date) = &self.due_date {
            task.due_date = Some(due_date.clone());
        }
        if let Some(expanded) = self.expanded {
            task.expanded = expanded;
        }
        if let Some(issues) = &self.issues {
            task.issues = Issues(issues.clone());
        }
    }
}

pub async fn get(config: &RequestConfig, project_id: Uuid) -> ConnectorResult<TasksResponse> {
    let res = get_client(config, "tasks", RequestType::GET, true)?
        .query(&[("projectId", project_id.to_string())])
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post(config: &RequestConfig, task: &MakeTaskRequest) -> ConnectorResult<TaskCreated> {
    let res = get_client(config, "tasks", RequestType::POST, true)?
        .json(task)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn put(config: &RequestConfig, id: Uuid, patch: &TaskPatch) -> ConnectorResult<ChangesResponse> {
    let res = get_client(config, &format!("tasks/{}", id), RequestType::PUT, true)?
        .json(patch)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn delete(config: &RequestConfig, id: Uuid, deleted_by: &str) -> ConnectorResult<ChangesResponse> {
    let res = get_client(config, &format!("tasks/{}", id), RequestType::DELETE, true)?
        .query(&[("deletedBy", deleted_by)])
        .send()
        .await?;

    parse_response(res).await
}

/// Task operations the dashboard needs. Implemented over HTTP by
/// [`HttpTaskApi`]; tests substitute an in-memory double.
pub trait TaskApi {
    fn list_tasks(&self, project_id: Uuid) -> impl Future<Output = ConnectorResult<Vec<Task>>>;
    fn create_task(&self, task: &MakeTaskRequest) -> impl Future<Output = ConnectorResult<TaskCreated>>;
    fn update_task(&self, id: Uuid, patch: &TaskPatch) -> impl Future<Output = ConnectorResult<()>>;
    fn delete_task(&self, id: Uuid, deleted_by: &str) -> impl Future<Output = ConnectorResult<()>>;
}

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    pub config: RequestConfig,
}

impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self, project_id: Uuid) -> ConnectorResult<Vec<Task>> {
        Ok(get(&self.config, project_id).await?.tasks)
    }

    async fn create_task(&self, task: &MakeTaskRequest) -> ConnectorResult<TaskCreated> {
        post(&self.config, task).await
    }

    async fn update_task(&self, id: Uuid, patch: &TaskPatch) -> ConnectorResult<()> {
        put(&self.config, id, patch).await.map(|_| ())
    }

    async fn delete_task(&self, id: Uuid, deleted_by: &str) -> ConnectorResult<()> {
        delete(&self.config, id, deleted_by).await.map(|_| ())
    }
}
