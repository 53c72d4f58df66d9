/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use std::fmt;
use tracker_core::types::BaseResponse;

/// Handler failure. Every variant renders as `{"error": true, "message": ...}`
/// with the status from [`WebError::status`]; server-side causes are logged
/// and replaced by a generic message.
#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Database(DbErr),
    JsonParsing(JsonRejection),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            WebError::BadRequest(msg)
            | WebError::Unauthorized(msg)
            | WebError::Forbidden(msg)
            | WebError::NotFound(msg)
            | WebError::Conflict(msg) => msg,
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                "Database error".to_string()
            }
            WebError::JsonParsing(err) => format!("Invalid JSON: {}", err),
            WebError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                "Internal server error".to_string()
            }
        };

        let body = Json(BaseResponse {
            error: true,
            message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) | WebError::JsonParsing(_) => StatusCode::BAD_REQUEST,
            WebError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            WebError::Forbidden(_) => StatusCode::FORBIDDEN,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Conflict(_) => StatusCode::CONFLICT,
            WebError::Database(_) | WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn missing_fields() -> Self {
        WebError::BadRequest("Missing fields".to_string())
    }

    pub fn missing_user_id() -> Self {
        WebError::BadRequest("Missing userId".to_string())
    }

    pub fn already_exists(resource: &str) -> Self {
        WebError::Conflict(format!("{} already exists", resource))
    }

    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    /// Refusal for an action reserved to the `TMA` role.
    pub fn admin_only(action: &str) -> Self {
        WebError::Forbidden(format!("Only admin (TMA) can {}", action))
    }

    pub fn invalid_role(role: &str) -> Self {
        WebError::BadRequest(format!("Invalid role: {}", role))
    }

    pub fn invalid_credentials() -> Self {
        WebError::Unauthorized("Invalid credentials".to_string())
    }

    pub fn invalid_email() -> Self {
        WebError::BadRequest("Invalid Email".to_string())
    }

    pub fn failed_to_generate_token() -> Self {
        WebError::Internal(anyhow::anyhow!("Failed to generate token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WebError::missing_fields().status(), StatusCode::BAD_REQUEST);
        assert_eq!(WebError::already_exists("Task key").status(), StatusCode::CONFLICT);
        assert_eq!(WebError::not_found("Task").status(), StatusCode::NOT_FOUND);
        assert_eq!(WebError::admin_only("delete projects").status(), StatusCode::FORBIDDEN);
        assert_eq!(
            WebError::failed_to_generate_token().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_messages() {
        assert_eq!(
            WebError::admin_only("change roles").to_string(),
            "Forbidden: Only admin (TMA) can change roles"
        );
        assert_eq!(
            WebError::already_exists("Task key").to_string(),
            "Conflict: Task key already exists"
        );
        assert_eq!(
            WebError::invalid_role("Owner").to_string(),
            "Bad Request: Invalid role: Owner"
        );
    }
}
