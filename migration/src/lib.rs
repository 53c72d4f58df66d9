/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_table_user;
mod m20261019_000002_create_table_project;
mod m20261019_000003_create_table_task;
mod m20261019_000004_create_table_notification;
mod m20261019_000005_create_table_notification_recipient;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_table_user::Migration),
            Box::new(m20261019_000002_create_table_project::Migration),
            Box::new(m20261019_000003_create_table_task::Migration),
            Box::new(m20261019_000004_create_table_notification::Migration),
            Box::new(m20261019_000005_create_table_notification_recipient::Migration),
        ]
    }
}
