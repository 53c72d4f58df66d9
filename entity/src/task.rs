/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{
    Alias, ArrayType, DynIden, IntoIden, Nullable, StringLen, ValueType, ValueTypeErr,
};
use sea_orm::{
    ColIdx, ColumnDef, ColumnType, ColumnTypeTrait, FromJsonQueryResult, QueryResult,
    TryGetError, TryGetable, Value,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored as text. `DONE` and the older `Done` are kept as distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Default, EnumIter, Deserialize, Serialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "TO DO")]
    ToDo,
    #[serde(rename = "IN PROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
    /// Title-cased spelling of `DONE` still present in older records.
    #[serde(rename = "Done")]
    DoneTitleCase,
}

impl ActiveEnum for TaskStatus {
    type Value = String;
    type ValueVec = Vec<String>;

    fn name() -> DynIden {
        Alias::new("task_status").into_iden()
    }

    fn to_value(&self) -> Self::Value {
        match self {
            TaskStatus::ToDo => "TO DO",
            TaskStatus::InProgress => "IN PROGRESS",
            TaskStatus::Done => "DONE",
            TaskStatus::DoneTitleCase => "Done",
        }
        .to_owned()
    }

    fn try_from_value(v: &Self::Value) -> Result<Self, DbErr> {
        match v.as_str() {
            "TO DO" => Ok(TaskStatus::ToDo),
            "IN PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            "Done" => Ok(TaskStatus::DoneTitleCase),
            other => Err(DbErr::Type(format!("unexpected task status: {}", other))),
        }
    }

    fn db_type() -> ColumnDef {
        ColumnType::String(StringLen::None).def()
    }
}

impl From<TaskStatus> for Value {
    fn from(status: TaskStatus) -> Self {
        Value::String(Some(Box::new(status.to_value())))
    }
}

impl TryGetable for TaskStatus {
    fn try_get_by<I: ColIdx>(res: &QueryResult, index: I) -> Result<Self, TryGetError> {
        let value = <String as TryGetable>::try_get_by(res, index)?;
        <Self as ActiveEnum>::try_from_value(&value).map_err(TryGetError::DbErr)
    }
}

impl ValueType for TaskStatus {
    fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
        let value = <String as ValueType>::try_from(v)?;
        <Self as ActiveEnum>::try_from_value(&value).map_err(|_| ValueTypeErr)
    }

    fn type_name() -> String {
        "TaskStatus".to_owned()
    }

    fn array_type() -> ArrayType {
        ArrayType::String
    }

    fn column_type() -> ColumnType {
        ColumnType::String(StringLen::None)
    }
}

impl Nullable for TaskStatus {
    fn null() -> Value {
        Value::String(None)
    }
}

impl TaskStatus {
    /// Both spellings of done count as finished work.
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::DoneTitleCase)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TaskPriority {
    #[sea_orm(string_value = "Highest")]
    Highest,
    #[sea_orm(string_value = "High")]
    High,
    #[default]
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "Low")]
    Low,
    #[sea_orm(string_value = "Lowest")]
    Lowest,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Issue {
    pub id: String,
    pub problem: String,
    pub solution: String,
    pub created_by: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Issues(pub Vec<Issue>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "task")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub key: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Display name as submitted; refreshed from `assignee_id` when read.
    pub assignee: String,
    pub assignee_id: Option<Uuid>,
    pub reporter: Option<String>,
    pub priority: TaskPriority,
    #[sea_orm(column_type = "String(StringLen::None)")]
    pub status: TaskStatus,
    pub resolution: String,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub parent_id: Option<Uuid>,
    pub expanded: i16,
    #[sea_orm(indexed)]
    pub project_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub issues: Issues,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id"
    )]
    Project,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssigneeId",
        to = "super::user::Column::Id"
    )]
    Assignee,
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
