/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use entity::project::ProjectType;
use entity::task::{Issues, TaskPriority, TaskStatus};
use entity::user::UserRole;
use password_auth::generate_hash;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait};
use std::sync::Arc;
use uuid::Uuid;

use super::consts::*;
use super::database::get_user_by_email;
use super::input::load_secret;
use super::messages::iso_timestamp;
use super::types::*;

/// Creates the configured admin account and, on an empty database, a default
/// project with its first task.
pub async fn seed(state: Arc<ServerState>) -> Result<()> {
    seed_admin(Arc::clone(&state)).await?;

    let projects = EProject::find()
        .count(&state.db)
        .await
        .context("Failed to count projects")?;

    if projects > 0 {
        return Ok(());
    }

    tracing::info!("Seeding default project");

    let project = AProject {
        id: Set(Uuid::now_v7()),
        name: Set(DEFAULT_PROJECT_NAME.to_string()),
        key: Set(DEFAULT_PROJECT_KEY.to_string()),
        kind: Set(ProjectType::Software),
        lead: Set(Some(state.cli.admin_name.clone())),
        icon_color: Set(Some(DEFAULT_AVATAR_COLOR.to_string())),
    }
    .insert(&state.db)
    .await
    .context("Failed to seed default project")?;

    let tasks = ETask::find()
        .count(&state.db)
        .await
        .context("Failed to count tasks")?;

    if tasks > 0 {
        return Ok(());
    }

    tracing::info!("Seeding default task");

    let now = Utc::now();
    let timestamp = iso_timestamp(now);

    ATask {
        id: Set(Uuid::now_v7()),
        key: Set(format!("{}-1", project.key)),
        title: Set(DEFAULT_TASK_TITLE.to_string()),
        description: Set(Some("Initial setup".to_string())),
        assignee: Set(UNASSIGNED.to_string()),
        assignee_id: Set(None),
        reporter: Set(Some(state.cli.admin_name.clone())),
        priority: Set(TaskPriority::Medium),
        status: Set(TaskStatus::ToDo),
        resolution: Set(RESOLUTION_UNRESOLVED.to_string()),
        created: Set(Some(timestamp.clone())),
        updated: Set(Some(timestamp.clone())),
        start_date: Set(Some(timestamp)),
        due_date: Set(Some(iso_timestamp(now + Duration::days(DEFAULT_TASK_DUE_DAYS)))),
        parent_id: Set(None),
        expanded: Set(0),
        project_id: Set(project.id),
        issues: Set(Issues::default()),
    }
    .insert(&state.db)
    .await
    .context("Failed to seed default task")?;

    Ok(())
}

async fn seed_admin(state: Arc<ServerState>) -> Result<()> {
    let (Some(email), Some(password_file)) =
        (&state.cli.admin_email, &state.cli.admin_password_file)
    else {
        tracing::debug!("No admin account configured, skipping");
        return Ok(());
    };

    if get_user_by_email(Arc::clone(&state), email).await?.is_some() {
        return Ok(());
    }

    let password = load_secret(password_file);
    if password.is_empty() {
        anyhow::bail!("Admin password file {} is empty", password_file);
    }

    tracing::info!("Seeding admin account {}", email);

    AUser {
        id: Set(Uuid::now_v7()),
        email: Set(email.clone()),
        password: Set(generate_hash(password)),
        name: Set(state.cli.admin_name.clone()),
        avatar_color: Set(DEFAULT_AVATAR_COLOR.to_string()),
        avatar_url: Set(None),
        role: Set(UserRole::Tma),
        last_login: Set(None),
        last_logout: Set(None),
    }
    .insert(&state.db)
    .await
    .context("Failed to seed admin account")?;

    Ok(())
}
