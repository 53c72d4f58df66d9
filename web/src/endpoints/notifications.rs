/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use std::sync::Arc;
use tracker_core::notifications::{
    NotificationPage, NotificationQuery, list_notifications, mark_read,
};
use tracker_core::overdue::scan_overdue;
use tracker_core::types::*;
use uuid::Uuid;

use super::MessageResponse;

/// Runs the overdue scan before listing; a failed scan never fails the
/// listing.
pub async fn get_notifications(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<NotificationQuery>,
) -> WebResult<Json<NotificationPage>> {
    if let Err(e) = scan_overdue(Arc::clone(&state), Utc::now()).await {
        tracing::warn!("Overdue scan failed: {:#}", e);
    }

    let page = list_notifications(state, &query).await?;
    Ok(Json(page))
}

pub async fn put_notification_read(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<Uuid>,
) -> WebResult<Json<MessageResponse>> {
    if !mark_read(state, id).await? {
        tracing::debug!("Notification {} not found", id);
    }

    Ok(MessageResponse::new("marked as read"))
}
