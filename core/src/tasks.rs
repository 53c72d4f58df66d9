/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use entity::notification::NotificationType;
use entity::task::{Issue, Issues, TaskPriority, TaskStatus};
use entity::user;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::consts::*;
use super::database::{get_task, get_user_by_name, project_name};
use super::input::{next_task_key, non_empty};
use super::messages;
use super::notifications::notify;
use super::rules::{Notice, UpdateContext, update_notices};
use super::types::*;

/// Distinguishes a field sent as `null` (`Some(None)`) from one that was
/// left out (`None`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    pub project_id: Option<Uuid>,
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub resolution: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub parent_id: Option<Uuid>,
    pub expanded: Option<i16>,
    pub project_id: Option<Uuid>,
    pub issues: Option<Vec<Issue>>,
}

/// Partial update of a task. Every present field overwrites the stored one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub key: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub assignee: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub reporter: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub resolution: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub created: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub updated: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<Uuid>>,
    pub expanded: Option<i16>,
    pub project_id: Option<Uuid>,
    pub issues: Option<Vec<Issue>>,
    pub modified_by: Option<String>,
    pub modifier_id: Option<Uuid>,
}

impl TaskPatch {
    fn apply(self, task: MTask, assignee_id: Option<Option<Uuid>>) -> ATask {
        let mut atask: ATask = task.into();

        if let Some(key) = self.key {
            atask.key = Set(key);
        }
        if let Some(title) = self.title {
            atask.title = Set(title);
        }
        if let Some(description) = self.description {
            atask.description = Set(description);
        }
        if let Some(assignee) = self.assignee {
            atask.assignee = Set(assignee);
        }
        if let Some(assignee_id) = assignee_id {
            atask.assignee_id = Set(assignee_id);
        }
        if let Some(reporter) = self.reporter {
            atask.reporter = Set(reporter);
        }
        if let Some(priority) = self.priority {
            atask.priority = Set(priority);
        }
        if let Some(status) = self.status {
            atask.status = Set(status);
        }
        if let Some(resolution) = self.resolution {
            atask.resolution = Set(resolution);
        }
        if let Some(created) = self.created {
            atask.created = Set(created);
        }
        if let Some(updated) = self.updated {
            atask.updated = Set(updated);
        }
        if let Some(start_date) = self.start_date {
            atask.start_date = Set(start_date);
        }
        if let Some(due_date) = self.due_date {
            atask.due_date = Set(due_date);
        }
        if let Some(parent_id) = self.parent_id {
            atask.parent_id = Set(parent_id);
        }
        if let Some(expanded) = self.expanded {
            atask.expanded = Set(expanded);
        }
        if let Some(project_id) = self.project_id {
            atask.project_id = Set(project_id);
        }
        if let Some(issues) = self.issues {
            atask.issues = Set(Issues(issues));
        }

        atask
    }
}

#[derive(Debug)]
pub struct TaskUpdate {
    pub task: MTask,
    pub notices: Vec<Notice>,
}

/// User id behind an assignee display name. `Unassigned` and unknown names
/// resolve to no user.
async fn resolve_assignee(state: Arc<ServerState>, assignee: &str) -> Result<Option<MUser>> {
    if assignee.is_empty() || assignee == UNASSIGNED {
        return Ok(None);
    }

    get_user_by_name(state, assignee).await
}

/// Replaces stored assignee names with the current name of the referenced
/// user.
async fn refresh_assignees(state: Arc<ServerState>, tasks: &mut [MTask]) -> Result<()> {
    let mut ids = tasks.iter().filter_map(|t| t.assignee_id).collect::<Vec<Uuid>>();
    ids.sort();
    ids.dedup();

    if ids.is_empty() {
        return Ok(());
    }

    let names = EUser::find()
        .filter(CUser::Id.is_in(ids))
        .all(&state.db)
        .await
        .context("Failed to query task assignees")?
        .into_iter()
        .map(|u| (u.id, u.name))
        .collect::<HashMap<Uuid, String>>();

    for task in tasks.iter_mut() {
        if let Some(name) = task.assignee_id.and_then(|id| names.get(&id)) {
            task.assignee = name.clone();
        }
    }

    Ok(())
}

pub async fn list_tasks(state: Arc<ServerState>, filter: &TaskFilter) -> Result<Vec<MTask>> {
    let mut condition = Condition::all();

    if let Some(project_id) = filter.project_id {
        condition = condition.add(CTask::ProjectId.eq(project_id));
    }

    if let Some(assignee) = non_empty(filter.assignee.clone()) {
        condition = condition.add(
            Condition::any().add(CTask::Assignee.eq(assignee.as_str())).add(
                CTask::AssigneeId.in_subquery(
                    Query::select()
                        .column(CUser::Id)
                        .from(user::Entity)
                        .and_where(CUser::Name.eq(assignee.as_str()))
                        .to_owned(),
                ),
            ),
        );
    }

    let mut tasks = ETask::find()
        .filter(condition)
        .order_by_asc(CTask::Id)
        .all(&state.db)
        .await
        .context("Failed to query tasks")?;

    refresh_assignees(state, &mut tasks).await?;

    Ok(tasks)
}

pub async fn next_key(state: Arc<ServerState>, project: &MProject) -> Result<String> {
    let keys = ETask::find()
        .select_only()
        .column(CTask::Key)
        .filter(CTask::Key.starts_with(format!("{}-", project.key)))
        .into_tuple::<String>()
        .all(&state.db)
        .await
        .context("Failed to query task keys")?;

    Ok(next_task_key(&project.key, keys.iter().map(String::as_str)))
}

/// Inserts a task into `project` and broadcasts `work_added`. The caller
/// checks that the title is present and the key is not taken.
pub async fn create_task(
    state: Arc<ServerState>,
    project: &MProject,
    task: NewTask,
) -> Result<MTask> {
    let key = match non_empty(task.key) {
        Some(key) => key,
        None => next_key(Arc::clone(&state), project).await?,
    };

    let assignee = non_empty(task.assignee).unwrap_or_else(|| UNASSIGNED.to_string());
    let assignee_id = resolve_assignee(Arc::clone(&state), &assignee)
        .await?
        .map(|u| u.id);

    let task = ATask {
        id: Set(Uuid::now_v7()),
        key: Set(key),
        title: Set(task.title.unwrap_or_default()),
        description: Set(task.description),
        assignee: Set(assignee),
        assignee_id: Set(assignee_id),
        reporter: Set(task.reporter),
        priority: Set(task.priority.unwrap_or_default()),
        status: Set(task.status.unwrap_or_default()),
        resolution: Set(task
            .resolution
            .unwrap_or_else(|| RESOLUTION_UNRESOLVED.to_string())),
        created: Set(task.created),
        updated: Set(task.updated),
        start_date: Set(task.start_date),
        due_date: Set(task.due_date),
        parent_id: Set(task.parent_id),
        expanded: Set(task.expanded.unwrap_or(0)),
        project_id: Set(project.id),
        issues: Set(Issues(task.issues.unwrap_or_default())),
    }
    .insert(&state.db)
    .await
    .context("Failed to insert task")?;

    notify(
        state,
        Notice::broadcast(
            NotificationType::WorkAdded,
            messages::work_added(
                &project.name,
                &task.key,
                &task.title,
                task.reporter.as_deref(),
                &messages::display_now(),
            ),
        ),
    )
    .await;

    Ok(task)
}

/// Applies `patch` and emits the completion and assignment notifications the
/// change calls for. Returns `None` when the task does not exist.
pub async fn update_task(
    state: Arc<ServerState>,
    id: Uuid,
    patch: TaskPatch,
) -> Result<Option<TaskUpdate>> {
    let Some(mut previous) = get_task(Arc::clone(&state), id).await? else {
        return Ok(None);
    };

    // Compare against the assignee's current name, not the one stored at
    // assignment time.
    let stored_assignee = previous.assignee.clone();
    refresh_assignees(Arc::clone(&state), std::slice::from_mut(&mut previous)).await?;

    let requested_status = patch.status.clone();
    let requested_assignee = patch.assignee.clone();
    let modified_by = non_empty(patch.modified_by.clone());
    let modifier_id = patch.modifier_id;

    let assignee_user = match requested_assignee.as_deref() {
        Some(assignee) if assignee != previous.assignee => {
            Some(resolve_assignee(Arc::clone(&state), assignee).await?)
        }
        _ => None,
    };

    let mut atask = patch.apply(
        previous.clone(),
        assignee_user.as_ref().map(|u| u.as_ref().map(|u| u.id)),
    );

    if !atask.assignee.is_set() && previous.assignee != stored_assignee {
        atask.assignee = Set(previous.assignee.clone());
    }

    let task = atask
        .update(&state.db)
        .await
        .context("Failed to update task")?;

    let project = project_name(Arc::clone(&state), previous.project_id).await;
    let date = messages::display_now();

    let ctx = UpdateContext {
        project: &project,
        title: &task.title,
        modified_by: modified_by.as_deref(),
        modifier_id,
        assignee_user_id: assignee_user.flatten().map(|u| u.id),
        date: &date,
    };

    let notices = update_notices(
        &previous,
        requested_status.as_ref(),
        requested_assignee.as_deref(),
        &ctx,
    );

    for notice in notices.iter() {
        notify(Arc::clone(&state), notice.clone()).await;
    }

    Ok(Some(TaskUpdate { task, notices }))
}

/// Removes a task and broadcasts `work_deleted`. Subtasks are left alone.
pub async fn delete_task(
    state: Arc<ServerState>,
    id: Uuid,
    deleted_by: Option<String>,
) -> Result<Option<MTask>> {
    let Some(task) = get_task(Arc::clone(&state), id).await? else {
        return Ok(None);
    };

    task.clone()
        .delete(&state.db)
        .await
        .context("Failed to delete task")?;

    let project = project_name(Arc::clone(&state), task.project_id).await;

    notify(
        state,
        Notice::broadcast(
            NotificationType::WorkDeleted,
            messages::work_deleted(
                &project,
                &task.title,
                non_empty(deleted_by).as_deref(),
                &messages::display_now(),
            ),
        ),
    )
    .await;

    Ok(Some(task))
}
