/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use entity::project::ProjectType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Project = entity::project::Model;

#[derive(Serialize, Deserialize, Debug)]
pub struct ProjectsResponse {
    pub message: String,
    pub projects: Vec<Project>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProjectCreated {
    pub message: String,
    pub id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MakeProjectRequest {
    pub name: String,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

pub async fn get(config: &RequestConfig) -> ConnectorResult<ProjectsResponse> {
    let res = get_client(config, "projects", RequestType::GET, false)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post(config: &RequestConfig, project: &MakeProjectRequest) -> ConnectorResult<ProjectCreated> {
    let res = get_client(config, "projects", RequestType::POST, true)?
        .json(project)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn delete(config: &RequestConfig, id: Uuid) -> ConnectorResult<MessageResponse> {
    let res = get_client(config, &format!("projects/{}", id), RequestType::DELETE, true)?
        .send()
        .await?;

    parse_response(res).await
}
