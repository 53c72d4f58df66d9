/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // project_id carries no foreign key: tasks outlive their project.
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Task::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Task::Key).string().not_null().unique_key())
                    .col(ColumnDef::new(Task::Title).string().not_null())
                    .col(ColumnDef::new(Task::Description).text().null())
                    .col(
                        ColumnDef::new(Task::Assignee)
                            .string()
                            .not_null()
                            .default("Unassigned"),
                    )
                    .col(ColumnDef::new(Task::AssigneeId).uuid().null())
                    .col(ColumnDef::new(Task::Reporter).string().null())
                    .col(
                        ColumnDef::new(Task::Priority)
                            .string()
                            .not_null()
                            .default("Medium"),
                    )
                    .col(
                        ColumnDef::new(Task::Status)
                            .string()
                            .not_null()
                            .default("TO DO"),
                    )
                    .col(
                        ColumnDef::new(Task::Resolution)
                            .string()
                            .not_null()
                            .default("Unresolved"),
                    )
                    .col(ColumnDef::new(Task::Created).string().null())
                    .col(ColumnDef::new(Task::Updated).string().null())
                    .col(ColumnDef::new(Task::StartDate).string().null())
                    .col(ColumnDef::new(Task::DueDate).string().null())
                    .col(ColumnDef::new(Task::ParentId).uuid().null())
                    .col(
                        ColumnDef::new(Task::Expanded)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Task::ProjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(Task::Issues)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-task-assignee_id")
                            .from(Task::Table, Task::AssigneeId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-task-project_id")
                    .table(Task::Table)
                    .col(Task::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Task {
    Table,
    Id,
    Key,
    Title,
    Description,
    Assignee,
    AssigneeId,
    Reporter,
    Priority,
    Status,
    Resolution,
    Created,
    Updated,
    StartDate,
    DueDate,
    ParentId,
    Expanded,
    ProjectId,
    Issues,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
