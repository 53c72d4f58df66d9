/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use entity::notification::NotificationType;
use entity::notification_recipient;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::consts::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT};
use super::messages::iso_now;
use super::rules::Notice;
use super::types::*;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub user_id: Option<Uuid>,
}

impl NotificationQuery {
    pub fn page(&self) -> u64 {
        self.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_LIMIT)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPage {
    pub notifications: Vec<MNotification>,
    pub total_pages: u64,
    pub current_page: u64,
    pub unread_count: u64,
}

pub async fn create_notification(
    state: Arc<ServerState>,
    kind: NotificationType,
    message: String,
    recipients: &[Uuid],
) -> Result<MNotification> {
    let notification = ANotification {
        id: Set(Uuid::now_v7()),
        message: Set(message),
        kind: Set(kind),
        is_read: Set(0),
        created_at: Set(iso_now()),
    }
    .insert(&state.db)
    .await
    .context("Failed to insert notification")?;

    if !recipients.is_empty() {
        let rows = recipients.iter().map(|user| ANotificationRecipient {
            id: Set(Uuid::now_v7()),
            notification: Set(notification.id),
            user: Set(*user),
        });

        ENotificationRecipient::insert_many(rows)
            .exec_without_returning(&state.db)
            .await
            .context("Failed to insert notification recipients")?;
    }

    Ok(notification)
}

/// Persists a notice. Failures are logged and swallowed so that the
/// operation which produced the notice is never affected.
pub async fn notify(state: Arc<ServerState>, notice: Notice) -> Option<MNotification> {
    let kind = notice.kind;

    match create_notification(state, notice.kind, notice.message, &notice.recipients).await {
        Ok(notification) => Some(notification),
        Err(e) => {
            tracing::warn!("Failed to create {:?} notification: {:#}", kind, e);
            None
        }
    }
}

/// Broadcasts plus the notifications addressed to `user_id`.
pub fn visible_to(user_id: Uuid) -> Condition {
    let targeted = || {
        Query::select()
            .column(CNotificationRecipient::Notification)
            .from(notification_recipient::Entity)
            .to_owned()
    };

    Condition::any()
        .add(CNotification::Id.not_in_subquery(targeted()))
        .add(
            CNotification::Id.in_subquery(
                targeted()
                    .and_where(CNotificationRecipient::User.eq(user_id))
                    .to_owned(),
            ),
        )
}

pub async fn list_notifications(
    state: Arc<ServerState>,
    query: &NotificationQuery,
) -> Result<NotificationPage> {
    let page = query.page();
    let limit = query.limit();

    let condition = match query.user_id {
        Some(user_id) => visible_to(user_id),
        None => Condition::all(),
    };

    let paginator = ENotification::find()
        .filter(condition.clone())
        .order_by_desc(CNotification::CreatedAt)
        .order_by_desc(CNotification::Id)
        .paginate(&state.db, limit);

    let total = paginator
        .num_items()
        .await
        .context("Failed to count notifications")?;

    let notifications = paginator
        .fetch_page(page - 1)
        .await
        .context("Failed to query notifications")?;

    let unread_count = ENotification::find()
        .filter(condition)
        .filter(CNotification::IsRead.eq(0))
        .count(&state.db)
        .await
        .context("Failed to count unread notifications")?;

    Ok(NotificationPage {
        notifications,
        total_pages: total.div_ceil(limit),
        current_page: page,
        unread_count,
    })
}

pub async fn mark_read(state: Arc<ServerState>, id: Uuid) -> Result<bool> {
    let Some(notification) = ENotification::find_by_id(id)
        .one(&state.db)
        .await
        .context("Failed to query notification")?
    else {
        return Ok(false);
    };

    let mut anotification: ANotification = notification.into();
    anotification.is_read = Set(1);
    anotification
        .update(&state.db)
        .await
        .context("Failed to mark notification as read")?;

    Ok(true)
}
