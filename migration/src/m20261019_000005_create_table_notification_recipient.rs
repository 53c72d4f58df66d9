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
        manager
            .create_table(
                Table::create()
                    .table(NotificationRecipient::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NotificationRecipient::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NotificationRecipient::Notification)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(NotificationRecipient::User).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notification_recipient-notification")
                            .from(
                                NotificationRecipient::Table,
                                NotificationRecipient::Notification,
                            )
                            .to(Notification::Table, Notification::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-notification_recipient-user")
                            .from(NotificationRecipient::Table, NotificationRecipient::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-notification_recipient-user")
                    .table(NotificationRecipient::Table)
                    .col(NotificationRecipient::User)
                    .col(NotificationRecipient::Notification)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationRecipient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NotificationRecipient {
    Table,
    Id,
    Notification,
    User,
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
