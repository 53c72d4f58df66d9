/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Notification = entity::notification::Model;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub total_pages: u64,
    pub current_page: u64,
    pub unread_count: u64,
}

pub async fn get(
    config: &RequestConfig,
    page: u64,
    limit: u64,
    user_id: Option<Uuid>,
) -> ConnectorResult<NotificationPage> {
    let mut endpoint = format!("notifications?page={}&limit={}", page, limit);

    if let Some(user_id) = user_id {
        endpoint.push_str(&format!("&userId={}", user_id));
    }

    let res = get_client(config, &endpoint, RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn put_read(config: &RequestConfig, id: Uuid) -> ConnectorResult<MessageResponse> {
    let res = get_client(
        config,
        &format!("notifications/{}/read", id),
        RequestType::PUT,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

/// Fetches a single-item page; only the unread count is of interest.
pub async fn unread_count(config: &RequestConfig, user_id: Option<Uuid>) -> ConnectorResult<u64> {
    Ok(get(config, 1, 1, user_id).await?.unread_count)
}
