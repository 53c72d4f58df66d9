/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod dashboard;
pub mod mutation;
pub mod notifications;
pub mod poller;
pub mod projects;
pub mod reconcile;
pub mod session;
pub mod tasks;
pub mod user;

use chrono::{Local, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

impl RequestConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        RequestConfig {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("token not set, log in first")]
    MissingToken,
    #[error(transparent)]
    Rejected(#[from] reconcile::Rejection),
    #[error("storage error: {0}")]
    Storage(String),
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    message: String,
}

pub type RequestType = reqwest::Method;

/// Decodes a success body as `T`. Error statuses are turned into
/// [`ConnectorError::Api`] carrying the server's `message` when present.
async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> ConnectorResult<T> {
    let status = res.status();
    let bytes = res.bytes().await?;

    if !status.is_success() {
        let message = match serde_json::from_slice::<ErrorResponse>(&bytes) {
            Ok(body) => body.message,
            Err(_) => String::from_utf8_lossy(&bytes).to_string(),
        };

        return Err(ConnectorError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice::<T>(&bytes).map_err(|e| ConnectorError::Decode(e.to_string()))
}

fn get_client(
    config: &RequestConfig,
    endpoint: &str,
    request_type: RequestType,
    login: bool,
) -> ConnectorResult<reqwest::RequestBuilder> {
    let client = reqwest::Client::new();
    let mut client = client.request(
        request_type,
        format!("{}/api/{}", config.server_url, endpoint),
    );

    client = client.header("Content-Type", "application/json");

    if !login {
        return Ok(client);
    }

    let token = config.token.as_ref().ok_or(ConnectorError::MissingToken)?;
    client = client.header("Authorization", format!("Bearer {}", token));

    Ok(client)
}

pub async fn health(config: &RequestConfig) -> ConnectorResult<MessageResponse> {
    let res = get_client(config, "health", RequestType::GET, false)?
        .send()
        .await?;

    parse_response(res).await
}

/// ISO-8601 with milliseconds, the format due dates are stored in.
pub fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Local timestamp written into `updated` by client-side edits.
pub fn local_timestamp() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Timestamp used for `created`/`updated` of new tasks, e.g. `Oct 19, 2026, 02:05 PM`.
pub fn created_timestamp() -> String {
    Local::now().format("%b %d, %Y, %I:%M %p").to_string()
}
