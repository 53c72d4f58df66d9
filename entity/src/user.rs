/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Default, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserRole {
    #[default]
    #[sea_orm(string_value = "User")]
    User,
    #[sea_orm(string_value = "Team Lead")]
    #[serde(rename = "Team Lead")]
    TeamLead,
    #[sea_orm(string_value = "Developer")]
    Developer,
    /// Administrative role: may change roles and delete projects.
    #[sea_orm(string_value = "TMA")]
    #[serde(rename = "TMA")]
    Tma,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "user")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[sea_orm(indexed)]
    pub name: String,
    pub avatar_color: String,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub last_login: Option<String>,
    pub last_logout: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::task::Entity")]
    AssignedTasks,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
