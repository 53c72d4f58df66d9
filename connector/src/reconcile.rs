/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Parent/subtask consistency for edits made against the cached task list.
//!
//! A parent cannot be completed while a subtask is open. Completing the
//! last open subtask completes the parent, and reopening a subtask of a
//! completed parent reopens the parent.

use crate::tasks::{Task, TaskPatch};
use entity::task::TaskStatus;
use thiserror::Error;
use uuid::Uuid;

pub const RESOLUTION_DONE: &str = "Done";
pub const RESOLUTION_UNRESOLVED: &str = "Unresolved";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("task {0} is not in the local task list")]
    UnknownTask(Uuid),
    #[error("cannot mark {key} as done because {pending} subtask(s) are pending")]
    PendingSubtasks { key: String, pending: usize },
    #[error("{0} is already a subtask and cannot have subtasks")]
    NestedSubtask(String),
}

/// The requests one edit turns into: the edit itself and, when the
/// hierarchy demands it, a follow-up on the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePlan {
    pub primary: (Uuid, TaskPatch),
    pub parent: Option<(Uuid, TaskPatch)>,
}

impl UpdatePlan {
    pub fn apply(&self, tasks: &mut [Task]) {
        for task in tasks.iter_mut() {
            if task.id == self.primary.0 {
                self.primary.1.apply(task);
            }

            if let Some((parent_id, patch)) = &self.parent {
                if task.id == *parent_id {
                    patch.apply(task);
                }
            }
        }
    }
}

fn is_complete(status: &TaskStatus) -> bool {
    *status == TaskStatus::Done
}

pub fn plan_update(tasks: &[Task], id: Uuid, patch: &TaskPatch, now: &str) -> Result<UpdatePlan, Rejection> {
    let task = tasks
        .iter()
        .find(|t| t.id == id)
        .ok_or(Rejection::UnknownTask(id))?;

    if patch.status.as_ref().is_some_and(is_complete) {
        let pending = tasks
            .iter()
            .filter(|t| t.parent_id == Some(id) && !is_complete(&t.status))
            .count();

        if pending > 0 {
            return Err(Rejection::PendingSubtasks {
                key: task.key.clone(),
                pending,
            });
        }
    }

    let parent = task
        .parent_id
        .and_then(|parent_id| tasks.iter().find(|t| t.id == parent_id))
        .and_then(|parent| {
            let all_done = tasks
                .iter()
                .filter(|t| t.parent_id == Some(parent.id))
                .all(|sibling| match (&patch.status, sibling.id == id) {
                    (Some(status), true) => is_complete(status),
                    _ => is_complete(&sibling.status),
                });

            let reopened = patch.status.as_ref().is_some_and(|s| !is_complete(s));

            if all_done && !is_complete(&parent.status) {
                Some((parent.id, derived(TaskStatus::Done, RESOLUTION_DONE, now)))
            } else if !all_done && is_complete(&parent.status) && reopened {
                Some((parent.id, derived(TaskStatus::InProgress, RESOLUTION_UNRESOLVED, now)))
            } else {
                None
            }
        });

    Ok(UpdatePlan {
        primary: (id, patch.clone()),
        parent,
    })
}

fn derived(status: TaskStatus, resolution: &str, now: &str) -> TaskPatch {
    TaskPatch {
        status: Some(status),
        resolution: Some(resolution.to_string()),
        updated: Some(now.to_string()),
        ..Default::default()
    }
}
