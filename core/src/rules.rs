/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Decides which notifications a task update produces. Nothing in here
//! touches the database; callers resolve the project name and the assignee's
//! user id beforehand.

use entity::notification::NotificationType;
use entity::task::TaskStatus;
use uuid::Uuid;

use super::consts::UNASSIGNED;
use super::messages;
use super::types::MTask;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NotificationType,
    pub message: String,
    /// Empty for broadcasts.
    pub recipients: Vec<Uuid>,
}

impl Notice {
    pub fn broadcast(kind: NotificationType, message: String) -> Self {
        Notice {
            kind,
            message,
            recipients: Vec::new(),
        }
    }

    pub fn is_broadcast(&self) -> bool {
        self.recipients.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateContext<'a> {
    pub project: &'a str,
    /// Title after the update was applied.
    pub title: &'a str,
    pub modified_by: Option<&'a str>,
    pub modifier_id: Option<Uuid>,
    pub assignee_user_id: Option<Uuid>,
    pub date: &'a str,
}

/// Only an explicit `DONE` counts; the title-cased spelling does not
/// trigger a completion message.
pub fn completion_notice(
    previous: &TaskStatus,
    requested: Option<&TaskStatus>,
    ctx: &UpdateContext,
) -> Option<Notice> {
    match requested {
        Some(TaskStatus::Done) if *previous != TaskStatus::Done => Some(Notice::broadcast(
            NotificationType::WorkCompleted,
            messages::work_completed(ctx.project, ctx.title, ctx.modified_by, ctx.date),
        )),
        _ => None,
    }
}

pub fn assignment_recipients(modifier_id: Option<Uuid>, assignee_user_id: Option<Uuid>) -> Vec<Uuid> {
    let mut recipients = Vec::with_capacity(2);

    for id in [modifier_id, assignee_user_id].into_iter().flatten() {
        if !recipients.contains(&id) {
            recipients.push(id);
        }
    }

    recipients
}

pub fn assignment_notice(
    previous: &str,
    requested: Option<&str>,
    ctx: &UpdateContext,
) -> Option<Notice> {
    let assignee = requested.filter(|a| !a.is_empty() && *a != previous && *a != UNASSIGNED)?;
    let recipients = assignment_recipients(ctx.modifier_id, ctx.assignee_user_id);

    if recipients.is_empty() {
        return None;
    }

    Some(Notice {
        kind: NotificationType::Assignment,
        message: messages::assignment(ctx.project, ctx.title, assignee, ctx.modified_by, ctx.date),
        recipients,
    })
}

pub fn update_notices(
    previous: &MTask,
    requested_status: Option<&TaskStatus>,
    requested_assignee: Option<&str>,
    ctx: &UpdateContext,
) -> Vec<Notice> {
    completion_notice(&previous.status, requested_status, ctx)
        .into_iter()
        .chain(assignment_notice(&previous.assignee, requested_assignee, ctx))
        .collect()
}
