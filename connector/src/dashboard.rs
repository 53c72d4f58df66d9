/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Client-side task list with optimistic edits.

use crate::auth::SessionUser;
use crate::mutation::Mutation;
use crate::projects::Project;
use crate::reconcile::{RESOLUTION_UNRESOLVED, Rejection, UpdatePlan, plan_update};
use crate::tasks::{MakeTaskRequest, Task, TaskApi, TaskCreated, TaskPatch};
use crate::*;
use entity::task::{TaskPriority, TaskStatus};
use futures::future::join_all;
use uuid::Uuid;

pub const UNASSIGNED: &str = "Unassigned";
pub const UNKNOWN_ACTOR: &str = "Unknown";

/// Who edits are attributed to.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub name: String,
    pub id: Option<Uuid>,
}

impl Actor {
    pub fn from_session(user: Option<&SessionUser>) -> Self {
        match user {
            Some(user) => Actor {
                name: user.name.clone(),
                id: Some(user.id),
            },
            None => Actor {
                name: UNKNOWN_ACTOR.to_string(),
                id: None,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTaskInput {
    pub title: String,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub parent_id: Option<Uuid>,
}

/// Next `{PROJECT_KEY}-{N}` after the highest number among the cached
/// keys of that project.
pub fn next_key(tasks: &[Task], project_key: &str) -> String {
    let max = tasks
        .iter()
        .filter(|t| t.key.starts_with(project_key))
        .filter_map(|t| t.key.split('-').nth(1)?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    format!("{}-{}", project_key, max + 1)
}

pub struct Dashboard<A: TaskApi> {
    api: A,
    actor: Actor,
    tasks: Vec<Task>,
}

impl<A: TaskApi> Dashboard<A> {
    pub fn new(api: A, actor: Actor) -> Self {
        Dashboard {
            api,
            actor,
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub async fn load(&mut self, project_id: Uuid) -> ConnectorResult<()> {
        self.tasks = self.api.list_tasks(project_id).await?;
        Ok(())
    }

    /// Applies `patch` locally, then sends it followed by any derived
    /// parent update. The parent request is only sent once the first one
    /// succeeded; any failure restores the list as it was before the edit.
    pub async fn update_task(&mut self, id: Uuid, patch: TaskPatch) -> ConnectorResult<()> {
        let plan = plan_update(&self.tasks, id, &patch, &local_timestamp()).inspect_err(|rejection| {
            tracing::warn!("Update of task {} rejected: {}", id, rejection);
        })?;

        let mut mutation = Mutation::begin(&mut self.tasks, |tasks| plan.apply(tasks));

        match self.send_plan(&plan).await {
            Ok(()) => {
                mutation.commit();
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error updating task {}: {}", id, e);
                mutation.rollback(&mut self.tasks);
                Err(e)
            }
        }
    }

    async fn send_plan(&self, plan: &UpdatePlan) -> ConnectorResult<()> {
        let (id, patch) = &plan.primary;
        let patch = patch.clone().with_actor(&self.actor.name, self.actor.id);
        self.api.update_task(*id, &patch).await?;

        if let Some((parent_id, patch)) = &plan.parent {
            let patch = patch.clone().with_actor(&self.actor.name, self.actor.id);
            self.api.update_task(*parent_id, &patch).await?;
        }

        Ok(())
    }

    pub async fn delete_task(&mut self, id: Uuid) -> ConnectorResult<()> {
        self.delete_tasks(&[id]).await
    }

    /// Removes all `ids` locally and deletes them concurrently. A single
    /// failed delete restores every removed task, including ones the
    /// server already deleted.
    pub async fn delete_tasks(&mut self, ids: &[Uuid]) -> ConnectorResult<()> {
        let mut mutation = Mutation::begin(&mut self.tasks, |tasks| {
            tasks.retain(|t| !ids.contains(&t.id));
        });

        let results = join_all(
            ids.iter()
                .map(|id| self.api.delete_task(*id, &self.actor.name)),
        )
        .await;

        match results.into_iter().find_map(Result::err) {
            None => {
                mutation.commit();
                Ok(())
            }
            Some(e) => {
                tracing::error!("Error deleting tasks: {}", e);
                mutation.rollback(&mut self.tasks);
                Err(e)
            }
        }
    }

    /// Creates a task in `project` keyed after the cached tasks and
    /// reloads the project's tasks from the server.
    pub async fn create_task(&mut self, project: &Project, input: NewTaskInput) -> ConnectorResult<TaskCreated> {
        if let Some(parent_id) = input.parent_id {
            if let Some(parent) = self.tasks.iter().find(|t| t.id == parent_id) {
                if parent.parent_id.is_some() {
                    return Err(Rejection::NestedSubtask(parent.key.clone()).into());
                }
            }
        }

        let timestamp = created_timestamp();
        let req = MakeTaskRequest {
            key: next_key(&self.tasks, &project.key),
            title: input.title,
            description: None,
            assignee: UNASSIGNED.to_string(),
            reporter: self.actor.name.clone(),
            priority: TaskPriority::Medium,
            status: TaskStatus::ToDo,
            resolution: RESOLUTION_UNRESOLVED.to_string(),
            created: timestamp.clone(),
            updated: timestamp,
            start_date: input.start_date.unwrap_or_else(iso_now),
            due_date: input.due_date,
            parent_id: input.parent_id,
            expanded: 0,
            project_id: project.id,
        };

        let created = self.api.create_task(&req).await?;
        self.load(project.id).await?;

        Ok(created)
    }
}
