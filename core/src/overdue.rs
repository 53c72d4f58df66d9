/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use entity::notification::NotificationType;
use entity::task::TaskStatus;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::messages;
use super::notifications::create_notification;
use super::types::*;

/// Tasks past their due date that are not done. Due dates are compared as
/// strings against `now` in ISO-8601 form; missing or empty dates never
/// match.
pub fn overdue_condition(now: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(CTask::Status.is_not_in([TaskStatus::Done, TaskStatus::DoneTitleCase]))
        .add(CTask::DueDate.is_not_null())
        .add(CTask::DueDate.ne(""))
        .add(CTask::DueDate.lt(messages::iso_timestamp(now)))
}

/// Creates one broadcast `due` notification per overdue task, unless one
/// with the same message already exists. Returns how many were created.
pub async fn scan_overdue(state: Arc<ServerState>, now: DateTime<Utc>) -> Result<usize> {
    let tasks = ETask::find()
        .filter(overdue_condition(now))
        .order_by_asc(CTask::Id)
        .all(&state.db)
        .await
        .context("Failed to query overdue tasks")?;

    let mut created = 0;

    for task in tasks {
        let message = messages::overdue(&task.key, &task.title);

        let exists = ENotification::find()
            .filter(CNotification::Message.eq(message.as_str()))
            .filter(CNotification::Kind.eq(NotificationType::Due))
            .one(&state.db)
            .await;

        match exists {
            Ok(None) => {}
            Ok(Some(_)) => continue,
            Err(e) => {
                tracing::warn!("Failed to look up due notification for {}: {}", task.key, e);
                continue;
            }
        }

        match create_notification(Arc::clone(&state), NotificationType::Due, message, &[]).await {
            Ok(_) => created += 1,
            Err(e) => tracing::warn!("Failed to create due notification for {}: {:#}", task.key, e),
        }
    }

    if created > 0 {
        tracing::debug!("Created {} due notifications", created);
    }

    Ok(created)
}
