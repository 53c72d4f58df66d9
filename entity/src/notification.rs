/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    #[sea_orm(string_value = "due")]
    Due,
    #[sea_orm(string_value = "work_added")]
    WorkAdded,
    #[sea_orm(string_value = "work_completed")]
    WorkCompleted,
    #[sea_orm(string_value = "work_deleted")]
    WorkDeleted,
    #[sea_orm(string_value = "assignment")]
    Assignment,
    #[sea_orm(string_value = "project_created")]
    ProjectCreated,
}

/// A notification without rows in `notification_recipient` is a broadcast.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(rename = "isRead")]
    pub is_read: i16,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::notification_recipient::Entity")]
    Recipients,
}

impl Related<super::notification_recipient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
