/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for notification entities

use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_notification_recipients() -> Result<(), DbErr> {
    let notification_id = Uuid::now_v7();
    let user_id = Uuid::now_v7();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![notification_recipient::Model {
            id: Uuid::now_v7(),
            notification: notification_id,
            user: user_id,
        }]])
        .into_connection();

    let recipients = notification_recipient::Entity::find()
        .filter(notification_recipient::Column::Notification.eq(notification_id))
        .all(&db)
        .await?;

    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].user, user_id);

    Ok(())
}

#[test]
fn test_notification_wire_shape() {
    let notification = notification::Model {
        id: Uuid::now_v7(),
        message: "Task KAN-1: \"Setup\" is overdue".to_owned(),
        kind: notification::NotificationType::Due,
        is_read: 0,
        created_at: "2026-10-19T08:00:00.000Z".to_owned(),
    };

    let json = serde_json::to_value(&notification).unwrap();

    assert_eq!(json["type"], "due");
    assert_eq!(json["isRead"], 0);
    assert_eq!(json["created_at"], "2026-10-19T08:00:00.000Z");
}
