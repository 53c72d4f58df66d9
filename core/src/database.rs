/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use migration::Migrator;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::UNKNOWN_PROJECT;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file)
            .context("Failed to read database url from file")?
            .trim()
            .to_string()
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true).sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    Ok(db)
}

pub async fn get_user(state: Arc<ServerState>, id: Uuid) -> Result<Option<MUser>> {
    EUser::find_by_id(id)
        .one(&state.db)
        .await
        .context("Failed to query user")
}

pub async fn get_user_by_name(state: Arc<ServerState>, name: &str) -> Result<Option<MUser>> {
    EUser::find()
        .filter(CUser::Name.eq(name))
        .one(&state.db)
        .await
        .context("Failed to query user by name")
}

pub async fn get_user_by_email(state: Arc<ServerState>, email: &str) -> Result<Option<MUser>> {
    EUser::find()
        .filter(CUser::Email.eq(email))
        .one(&state.db)
        .await
        .context("Failed to query user by email")
}

pub async fn get_project(state: Arc<ServerState>, id: Uuid) -> Result<Option<MProject>> {
    EProject::find_by_id(id)
        .one(&state.db)
        .await
        .context("Failed to query project")
}

pub async fn get_task(state: Arc<ServerState>, id: Uuid) -> Result<Option<MTask>> {
    ETask::find_by_id(id)
        .one(&state.db)
        .await
        .context("Failed to query task")
}

pub async fn get_task_by_key(state: Arc<ServerState>, key: &str) -> Result<Option<MTask>> {
    ETask::find()
        .filter(CTask::Key.eq(key))
        .one(&state.db)
        .await
        .context("Failed to query task by key")
}

/// Name of the project for message texts. Lookup failures only cost the
/// name, never the surrounding operation.
pub async fn project_name(state: Arc<ServerState>, id: Uuid) -> String {
    match get_project(state, id).await {
        Ok(Some(project)) => project.name,
        Ok(None) => UNKNOWN_PROJECT.to_string(),
        Err(e) => {
            tracing::warn!("Failed to resolve project {}: {:#}", id, e);
            UNKNOWN_PROJECT.to_string()
        }
    }
}
