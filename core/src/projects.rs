/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use entity::notification::NotificationType;
use entity::project::ProjectType;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use super::consts::UNKNOWN_ACTOR;
use super::database::get_project;
use super::input::non_empty;
use super::messages;
use super::notifications::notify;
use super::rules::Notice;
use super::types::*;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: Option<String>,
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ProjectType>,
    pub lead: Option<String>,
    pub icon_color: Option<String>,
    pub creator: Option<String>,
}

/// Newest first.
pub async fn list_projects(state: Arc<ServerState>) -> Result<Vec<MProject>> {
    EProject::find()
        .order_by_desc(CProject::Id)
        .all(&state.db)
        .await
        .context("Failed to query projects")
}

pub async fn create_project(state: Arc<ServerState>, project: NewProject) -> Result<MProject> {
    let created_by = non_empty(project.creator)
        .or_else(|| non_empty(project.lead.clone()))
        .unwrap_or_else(|| UNKNOWN_ACTOR.to_string());

    let project = AProject {
        id: Set(Uuid::now_v7()),
        name: Set(project.name.unwrap_or_default()),
        key: Set(project.key.unwrap_or_default()),
        kind: Set(project.kind.unwrap_or_default()),
        lead: Set(project.lead),
        icon_color: Set(project.icon_color),
    }
    .insert(&state.db)
    .await
    .context("Failed to insert project")?;

    notify(
        state,
        Notice::broadcast(
            NotificationType::ProjectCreated,
            messages::project_created(&project.name, &created_by, &messages::display_now()),
        ),
    )
    .await;

    Ok(project)
}

/// Deletes the project row only; its tasks stay in place.
pub async fn delete_project(state: Arc<ServerState>, id: Uuid) -> Result<Option<MProject>> {
    let Some(project) = get_project(Arc::clone(&state), id).await? else {
        return Ok(None);
    };

    project
        .clone()
        .delete(&state.db)
        .await
        .context("Failed to delete project")?;

    tracing::info!("Deleted project {} ({})", project.name, project.id);
    Ok(Some(project))
}
